//! Build script for bitlink-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates the selected identity file at compile time
//! - Generates the `DeviceConfig` constant the firmware is built with
//!
//! The identity is picked with `BITLINK_DEVICE=<name>`, naming a file in
//! `identities/` without the `.toml` extension. The default is `primary`.

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use bitlink_core::DeviceIdentity;
use serde::Deserialize;

/// Identity used when `BITLINK_DEVICE` is not set
const DEFAULT_DEVICE: &str = "primary";

/// Contents of an identity file
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct IdentityFile {
    token: String,
    #[serde(default)]
    event_suffix: String,
    #[serde(default)]
    event_gate: GateSetting,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum GateSetting {
    #[default]
    Always,
    AfterHandshake,
}

impl GateSetting {
    fn as_rust(&self) -> &'static str {
        match self {
            GateSetting::Always => "EventGate::Always",
            GateSetting::AfterHandshake => "EventGate::AfterHandshake",
        }
    }
}

fn main() {
    setup_linker();
    let (name, identity) = load_identity();
    generate_config(&name, &identity);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Read and validate `identities/<BITLINK_DEVICE>.toml`
fn load_identity() -> (String, IdentityFile) {
    println!("cargo:rerun-if-env-changed=BITLINK_DEVICE");
    println!("cargo:rerun-if-changed=identities");

    let name = env::var("BITLINK_DEVICE").unwrap_or_else(|_| DEFAULT_DEVICE.to_string());
    let path = Path::new("identities").join(format!("{name}.toml"));
    println!("cargo:rerun-if-changed={}", path.display());

    if !path.exists() {
        fail(
            &format!("ERROR: identity '{name}' not found"),
            &[
                &format!("Expected {}", path.display()),
                "Set BITLINK_DEVICE to the name of a file in identities/",
            ],
        );
    }

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) => fail(
            &format!("ERROR: failed to read {}", path.display()),
            &[&format!("Error: {e}")],
        ),
    };

    let identity: IdentityFile = match toml::from_str(&content) {
        Ok(identity) => identity,
        Err(e) => {
            let msg = e.to_string();
            let lines: Vec<&str> = msg.lines().collect();
            fail(&format!("ERROR: invalid identity file {}", path.display()), &lines)
        }
    };

    if let Err(e) = DeviceIdentity::validate(&identity.token, &identity.event_suffix) {
        fail(
            &format!("ERROR: invalid identity in {}", path.display()),
            &[
                &format!("{e:?}"),
                "token: 1-8 printable ASCII characters, no spaces",
                "event_suffix: 0-8 printable ASCII characters, no spaces",
            ],
        );
    }

    println!(
        "cargo:warning=building identity '{name}' (token {:?}, suffix {:?})",
        identity.token, identity.event_suffix
    );
    (name, identity)
}

/// Write `identity.rs` into OUT_DIR
fn generate_config(name: &str, identity: &IdentityFile) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let code = format!(
        "// Generated by build.rs from identities/{name}.toml\n\
         \n\
         /// Name of the identity file this image was built from\n\
         pub const NAME: &str = {name:?};\n\
         \n\
         /// Compiled-in device configuration\n\
         pub const CONFIG: DeviceConfig =\n    \
             DeviceConfig::new(DeviceIdentity::checked({token:?}, {suffix:?}))\n        \
             .with_event_gate({gate});\n",
        token = identity.token,
        suffix = identity.event_suffix,
        gate = identity.event_gate.as_rust(),
    );
    fs::write(out_dir.join("identity.rs"), code).unwrap();
}

/// Abort the build with a boxed error message
fn fail(title: &str, details: &[&str]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        {}\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        format_error_lines(&[title]),
        format_error_lines(details)
    );
}

/// Format error message lines with box drawing
fn format_error_lines(lines: &[&str]) -> String {
    lines
        .iter()
        .map(|line| format!("║  {:<64} ║", truncate_line(line)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Shorten `line` to fit the 64-column box, cutting on a character boundary
fn truncate_line(line: &str) -> String {
    match line.char_indices().nth(61) {
        Some((cut, _)) if line.chars().count() > 64 => format!("{}...", &line[..cut]),
        _ => line.to_string(),
    }
}
