//! Kept in its own binary so no other test opens descriptors concurrently.

use tcptune_core::ExtendedOptions;

#[cfg(target_os = "linux")]
#[test]
fn repeated_probes_do_not_leak_descriptors() -> anyhow::Result<()> {
    use tcptune_integration_tests::open_fd_count;

    let options = ExtendedOptions::system();
    options.initialize();
    // Warm up anything lazily opened by the first probe.
    options.is_keep_alive_tuning_supported();

    let before = open_fd_count()?;
    for _ in 0..200 {
        options.is_keep_alive_tuning_supported();
    }
    let after = open_fd_count()?;

    assert_eq!(before, after);
    Ok(())
}

#[test]
fn repeated_initialization_resolves_once() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                let options = ExtendedOptions::system();
                for _ in 0..32 {
                    options.initialize();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(tcptune_core::handle::resolution_count(), 1);
}
