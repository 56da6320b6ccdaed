#![no_main]
use libfuzzer_sys::fuzz_target;
use nav::{parse_args, ConfigOverlay, SwitchRegistry};

/// Fuzz the switch parser with arbitrary token streams.
///
/// Input is split on NUL bytes into tokens. `-f` tokens are dropped so the
/// fuzzer never reads from the filesystem.
fuzz_target!(|data: &[u8]| {
    // Raw bytes exercise the config file decoder, including invalid UTF-8.
    let _ = ConfigOverlay::from_slice(data);

    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(registry) = SwitchRegistry::builtin() {
            let tokens: Vec<&str> = s.split('\0').filter(|t| *t != "-f").collect();
            let _ = parse_args(&registry, &tokens);
        }
    }
});
