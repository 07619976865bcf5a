use anyhow::Context;
use tcptune_common::config::KeepAliveSettings;
use tcptune_common::{SocketError, TcpOption};
use tcptune_core::{ExtendedOptions, KeepAliveSnapshot};
use tcptune_integration_tests::loopback_pair;

fn options() -> ExtendedOptions {
    let options = ExtendedOptions::system();
    options.initialize();
    options
}

#[test]
fn idle_time_round_trips_on_a_real_socket() -> anyhow::Result<()> {
    let options = options();
    if !options.is_option_supported(TcpOption::KeepAliveIdle) {
        return Ok(());
    }

    let (client, _server) = loopback_pair()?;
    for value in [1, 30, 7200] {
        options.set_keep_alive_idle_time(&client, value)?;
        assert_eq!(options.get_keep_alive_idle_time(&client)?, value);
    }
    Ok(())
}

#[test]
fn all_tunables_round_trip_when_supported() -> anyhow::Result<()> {
    let options = options();
    if !options.is_keep_alive_tuning_supported() {
        return Ok(());
    }

    let (client, _server) = loopback_pair()?;
    let settings = KeepAliveSettings { probes: Some(5), idle: Some(45), interval: Some(9) };
    options.apply(&client, &settings).context("apply")?;

    assert_eq!(
        options.snapshot(&client)?,
        KeepAliveSnapshot { probes: 5, idle: 45, interval: 9 }
    );
    Ok(())
}

#[test]
fn settings_on_one_socket_do_not_leak_to_another() -> anyhow::Result<()> {
    let options = options();
    if !options.is_option_supported(TcpOption::KeepAliveProbes) {
        return Ok(());
    }

    let (client, server) = loopback_pair()?;
    let before = options.get_keep_alive_probe_count(&server)?;
    let changed = if before == 3 { 4 } else { 3 };

    options.set_keep_alive_probe_count(&client, changed)?;
    assert_eq!(options.get_keep_alive_probe_count(&client)?, changed);
    assert_eq!(options.get_keep_alive_probe_count(&server)?, before);
    Ok(())
}

#[cfg(unix)]
#[test]
fn invalid_handle_is_an_operation_failure() {
    let options = options();
    let bogus = tcptune_core::SocketHandle(-1);

    match options.get_keep_alive_interval(&bogus) {
        Err(SocketError::OperationFailed { operation, source }) => {
            assert_eq!(operation, "get option TCP_KEEPINTVL failed");
            assert_eq!(source.raw_os_error(), Some(libc::EBADF));
        }
        other => panic!("expected OperationFailed, got {other:?}"),
    }

    let err = options.set_keep_alive_probe_count(&bogus, 3).unwrap_err();
    assert!(!err.is_unsupported());
    assert!(err.to_string().contains("TCP_KEEPCNT"));
}

#[cfg(unix)]
#[test]
fn non_socket_handle_is_an_operation_failure() -> anyhow::Result<()> {
    let options = options();
    let file = std::fs::File::open("/dev/null")?;

    let err = options.get_keep_alive_idle_time(&file).unwrap_err();
    assert!(!err.is_unsupported());
    Ok(())
}

#[test]
fn flow_control_is_unsupported_on_real_sockets() -> anyhow::Result<()> {
    let options = options();
    let (client, _server) = loopback_pair()?;
    let mut flow = tcptune_common::flow::SocketFlow::create();

    assert!(!options.is_flow_control_supported());
    assert!(options.set_flow_option(&client, &flow).unwrap_err().is_unsupported());
    assert!(options.get_flow_option(&client, &mut flow).unwrap_err().is_unsupported());
    Ok(())
}

#[tokio::test]
async fn tokio_streams_are_tunable() -> anyhow::Result<()> {
    let options = options();
    if !options.is_option_supported(TcpOption::KeepAliveInterval) {
        return Ok(());
    }

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let stream = tokio::net::TcpStream::connect(listener.local_addr()?).await?;

    options.set_keep_alive_interval(&stream, 12)?;
    assert_eq!(options.get_keep_alive_interval(&stream)?, 12);
    Ok(())
}
