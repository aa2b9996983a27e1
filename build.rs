use std::fs;
use std::path::Path;

fn define_value<'a>(contents: &'a str, name: &str) -> Option<&'a str> {
    contents
        .lines()
        .find(|l| l.contains(&format!("#define {}", name)))
        .and_then(|l| l.split('"').nth(1))
}

fn main() -> anyhow::Result<()> {
    // Necessary for ESP-IDF
    embuild::espidf::sysenv::output();

    println!("cargo:rustc-link-arg=-Wl,--undefined=esp_backtrace_print_app_description");
    println!("cargo:rerun-if-changed=wifi_config.h");

    // Compiled-in station credentials, used only when NVS and the card backup are both blank
    let wifi_config_path = "wifi_config.h";
    let (ssid, password) = if Path::new(wifi_config_path).exists() {
        let contents = fs::read_to_string(wifi_config_path)?;
        (
            define_value(&contents, "WIFI_SSID").unwrap_or_default().to_string(),
            define_value(&contents, "WIFI_PASSWORD").unwrap_or_default().to_string(),
        )
    } else {
        println!("cargo:warning=wifi_config.h not found, station credentials must come from the web UI or the SD backup");
        (String::new(), String::new())
    };
    println!("cargo:rustc-env=WIFI_SSID={}", ssid);
    println!("cargo:rustc-env=WIFI_PASSWORD={}", password);

    Ok(())
}
