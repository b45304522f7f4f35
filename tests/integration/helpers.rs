//! Shared fixtures for integration tests.

/// A trace log shaped like the wireless bridge's output: timestamped trace
/// lines from several sources, dump rows after the plugin's transfer
/// markers, and unrelated noise in between.
pub fn sample_log() -> &'static str {
    concat!(
        "12:00:01:095: INFO: XLinkKaiConnection.cpp:120:Connected to XLink Kai\n",
        "12:00:01:100: TRACE: WirelessPSPPluginDevice.cpp:238:Sent: \n",
        "000000 00 11 22 33 44 55 66 77 88 99 aa bb cc dd ee ff\n",
        "000040 01 02 03\n",
        "12:00:01:105: DEBUG: MonitorDevice.cpp:77:Channel hop\n",
        "000000 99 99 99\n",
        "12:00:01:200: TRACE: WirelessPSPPluginDevice.cpp:331:Received: \n",
        "000000 de ad be ef\n",
    )
}

/// The dump rows `sample_log` should produce.
pub fn expected_dumps() -> &'static str {
    concat!(
        "000000 00 11 22 33 44 55 66 77 88 99 aa bb cc dd ee ff\n",
        "000040 01 02 03\n",
        "000000 de ad be ef\n",
    )
}
