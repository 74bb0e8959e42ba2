//! Build script for iconlcd-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates panel.toml and packs it into OUT_DIR/panel.bin

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use iconlcd_core::config::{PanelConfig, MAX_CONTRAST, MAX_REGULATOR_RATIO};

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    setup_linker(&out_dir);
    pack_panel_config(&out_dir);
}

/// Set up linker search paths for memory.x
fn setup_linker(out_dir: &Path) {
    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Parse panel.toml, check ranges, and write the postcard encoding
fn pack_panel_config(out_dir: &Path) {
    println!("cargo:rerun-if-changed=panel.toml");

    let config_path = Path::new("panel.toml");

    let config = if config_path.exists() {
        let content = match fs::read_to_string(config_path) {
            Ok(content) => content,
            Err(e) => {
                panic!(
                    "\n\
                    ╔══════════════════════════════════════════════════════════════════╗\n\
                    ║  ERROR: Failed to read panel.toml                                ║\n\
                    ║                                                                  ║\n\
                    ║  Error: {:<56} ║\n\
                    ╚══════════════════════════════════════════════════════════════════╝\n",
                    e
                );
            }
        };

        match toml::from_str::<PanelConfig>(&content) {
            Ok(config) => config,
            Err(e) => {
                panic!(
                    "\n\
                    ╔══════════════════════════════════════════════════════════════════╗\n\
                    ║  ERROR: Invalid panel.toml                                       ║\n\
                    ╠══════════════════════════════════════════════════════════════════╣\n\
                    ║                                                                  ║\n\
                    {}\n\
                    ║                                                                  ║\n\
                    ╚══════════════════════════════════════════════════════════════════╝\n",
                    format_error_lines(&e.to_string())
                );
            }
        }
    } else {
        println!("cargo:warning=panel.toml not found, using default panel settings");
        PanelConfig::default()
    };

    validate_ranges(&config);

    let bytes = postcard::to_allocvec(&config).unwrap();
    fs::write(out_dir.join("panel.bin"), bytes).unwrap();
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Reject values the controller would silently mask
fn validate_ranges(config: &PanelConfig) {
    let mut errors = Vec::new();

    if config.regulator_ratio > MAX_REGULATOR_RATIO {
        errors.push(format!(
            "regulator_ratio = {} (must be 0-{})",
            config.regulator_ratio, MAX_REGULATOR_RATIO
        ));
    }
    if config.contrast > MAX_CONTRAST {
        errors.push(format!(
            "contrast = {} (must be 0-{})",
            config.contrast, MAX_CONTRAST
        ));
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: panel.toml values out of range                           ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format_error_lines(&errors.join("\n"))
        );
    }
}
