use std::fs;

use lipi_core::settings;

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: engine.default_mode={}, cache.capacity={}, variants={} suffixes",
        s.default_mode(),
        s.cache.capacity,
        s.variants.suffixes().count()
    );
}
