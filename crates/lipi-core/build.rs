fn main() {
    println!("cargo:rerun-if-changed=src/default_settings.toml");
    check_settings(
        "src/default_settings.toml",
        include_str!("src/default_settings.toml"),
    );
}

/// Every transliterator reads these tables at startup.
const SECTIONS: [&str; 3] = ["engine", "cache", "variants"];

fn check_settings(path: &str, content: &str) {
    let value = match content.parse::<toml::Table>() {
        Ok(v) => v,
        Err(e) => panic!("{path} contains invalid TOML: {e}"),
    };
    for section in SECTIONS {
        if !value.get(section).is_some_and(toml::Value::is_table) {
            panic!("{path} is missing the [{section}] table");
        }
    }
    let capacity = value
        .get("cache")
        .and_then(|cache| cache.get("capacity"))
        .and_then(toml::Value::as_integer);
    if !capacity.is_some_and(|c| c > 0) {
        panic!("{path}: cache.capacity must be a positive integer");
    }
}
