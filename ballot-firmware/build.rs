//! Build script for ballot-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates voter.toml at compile time
//! - Generates `wiring.rs` with the validated board description

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use ballot_core::config::{
    parse_pin_string, DisplayGeometry, KeypadPins, LcdPins, LcdTiming, PinConfig, ScanMap,
    ScanTiming, SessionTiming, ToneConfig, Wiring,
};
use serde::Deserialize;

fn main() {
    setup_linker();
    let config = load_config();
    let board = validate_config(&config);
    write_wiring(&board);
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

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct VoterToml {
    lcd: LcdSection,
    keypad: KeypadSection,
    buzzer: Option<BuzzerSection>,
    #[serde(default)]
    timing: TimingSection,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct LcdSection {
    rs: String,
    rw: String,
    enable: String,
    data: Vec<String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct KeypadSection {
    rows: Vec<String>,
    cols: Vec<String>,
    map: Vec<String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct BuzzerSection {
    pin: String,
    half_period_us: Option<u32>,
    duration_ms: Option<u32>,
}

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct TimingSection {
    scan_settle_ms: Option<u32>,
    lcd_power_on_ms: Option<u32>,
    lcd_pulse_us: Option<u32>,
    lcd_recovery_us: Option<u32>,
    lcd_command_settle_us: Option<u32>,
    lcd_clear_settle_us: Option<u32>,
    greeting_ms: Option<u32>,
    confirmation_ms: Option<u32>,
    tally_ms: Option<u32>,
}

/// Everything the firmware needs, validated
struct Board {
    wiring: Wiring,
    scan_map: ScanMap,
    scan_timing: ScanTiming,
    lcd_timing: LcdTiming,
    tone: ToneConfig,
    session_timing: SessionTiming,
}

/// Read and parse voter.toml
fn load_config() -> VoterToml {
    println!("cargo:rerun-if-changed=voter.toml");

    let config_path = Path::new("voter.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: voter.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a voter.toml wiring file.                 ║\n\
            ║  Please create one in the ballot-firmware directory.             ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read voter.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid voter.toml                                       ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    }
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Panic with a list of problems in one section
fn fail(section: &str, errors: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: Invalid {:<49}║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        format!("[{}] configuration", section),
        errors
            .iter()
            .map(|e| format!("║  • {:<62} ║", e))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

/// Parse a list of pin strings, collecting errors
fn parse_pins<const N: usize>(
    field: &str,
    pins: &[String],
    errors: &mut Vec<String>,
) -> [PinConfig; N] {
    let mut out = [PinConfig::default(); N];
    if pins.len() != N {
        errors.push(format!("'{}' needs {} pins, found {}", field, N, pins.len()));
        return out;
    }
    for (i, s) in pins.iter().enumerate() {
        out[i] = parse_pin(&format!("{}[{}]", field, i), s, errors);
    }
    out
}

fn parse_pin(field: &str, s: &str, errors: &mut Vec<String>) -> PinConfig {
    parse_pin_string(s).unwrap_or_else(|e| {
        errors.push(format!("'{}' = \"{}\": {:?}", field, s, e));
        PinConfig::default()
    })
}

/// Validate every section and build the board description
fn validate_config(config: &VoterToml) -> Board {
    // LCD
    let mut errors = Vec::new();
    let lcd = LcdPins {
        rs: parse_pin("rs", &config.lcd.rs, &mut errors),
        rw: parse_pin("rw", &config.lcd.rw, &mut errors),
        enable: parse_pin("enable", &config.lcd.enable, &mut errors),
        data: parse_pins("data", &config.lcd.data, &mut errors),
    };
    if !errors.is_empty() {
        fail("lcd", &errors);
    }

    // Keypad
    let keypad = KeypadPins {
        rows: parse_pins("rows", &config.keypad.rows, &mut errors),
        cols: parse_pins("cols", &config.keypad.cols, &mut errors),
    };
    let rows: Vec<&str> = config.keypad.map.iter().map(String::as_str).collect();
    let scan_map = ScanMap::parse_rows(&rows).unwrap_or_else(|e| {
        errors.push(format!("'map': {:?}", e));
        ScanMap::default()
    });
    if !errors.is_empty() {
        fail("keypad", &errors);
    }

    // Buzzer
    let mut tone = ToneConfig::default();
    let buzzer = config.buzzer.as_ref().map(|b| {
        tone.half_period_us = b.half_period_us.unwrap_or(tone.half_period_us);
        tone.duration_ms = b.duration_ms.unwrap_or(tone.duration_ms);
        if let Err(e) = tone.validate() {
            errors.push(format!("tone: {:?} (need at least one full cycle)", e));
        }
        parse_pin("pin", &b.pin, &mut errors)
    });
    if !errors.is_empty() {
        fail("buzzer", &errors);
    }

    let wiring = Wiring {
        lcd,
        keypad,
        buzzer,
    };
    if let Err(e) = wiring.validate() {
        fail("wiring", &[format!("{:?}", e)]);
    }

    // Timing overrides
    let t = &config.timing;
    let scan_defaults = ScanTiming::default();
    let scan_timing = ScanTiming {
        settle_ms: t.scan_settle_ms.unwrap_or(scan_defaults.settle_ms),
    };

    let lcd_defaults = LcdTiming::default();
    let lcd_timing = LcdTiming {
        power_on_ms: t.lcd_power_on_ms.unwrap_or(lcd_defaults.power_on_ms),
        pulse_us: t.lcd_pulse_us.unwrap_or(lcd_defaults.pulse_us),
        recovery_us: t.lcd_recovery_us.unwrap_or(lcd_defaults.recovery_us),
        command_settle_us: t
            .lcd_command_settle_us
            .unwrap_or(lcd_defaults.command_settle_us),
        clear_settle_us: t.lcd_clear_settle_us.unwrap_or(lcd_defaults.clear_settle_us),
    };
    if let Err(e) = lcd_timing.validate() {
        fail(
            "timing",
            &[format!(
                "lcd: {:?} (pulse must be > 0, clear settle >= command settle)",
                e
            )],
        );
    }

    let session_defaults = SessionTiming::default();
    let session_timing = SessionTiming {
        greeting_ms: t.greeting_ms.unwrap_or(session_defaults.greeting_ms),
        confirmation_ms: t.confirmation_ms.unwrap_or(session_defaults.confirmation_ms),
        tally_ms: t.tally_ms.unwrap_or(session_defaults.tally_ms),
    };

    println!("cargo:warning=voter.toml validated successfully");

    Board {
        wiring,
        scan_map,
        scan_timing,
        lcd_timing,
        tone,
        session_timing,
    }
}

fn pin_expr(cfg: &PinConfig) -> String {
    format!(
        "PinConfig {{ pin: {}, inverted: {} }}",
        cfg.pin, cfg.inverted
    )
}

fn pin_list(pins: &[PinConfig]) -> String {
    pins.iter().map(pin_expr).collect::<Vec<_>>().join(", ")
}

/// Write `wiring.rs` into OUT_DIR for the firmware to `include!`
fn write_wiring(board: &Board) {
    let w = &board.wiring;
    let buzzer = match &w.buzzer {
        Some(cfg) => format!("Some({})", pin_expr(cfg)),
        None => "None".to_string(),
    };
    let map_rows = board
        .scan_map
        .rows()
        .iter()
        .map(|row| {
            let keys = row
                .iter()
                .map(|k| format!("Key::{:?}", k))
                .collect::<Vec<_>>()
                .join(", ");
            format!("[{}]", keys)
        })
        .collect::<Vec<_>>()
        .join(",\n    ");
    let geometry = DisplayGeometry::default();
    let s = &board.scan_timing;
    let l = &board.lcd_timing;
    let t = &board.tone;
    let st = &board.session_timing;

    let source = format!(
        "// Generated from voter.toml by build.rs\n\
         \n\
         pub const WIRING: Wiring = Wiring {{\n    \
             lcd: LcdPins {{\n        \
                 rs: {rs},\n        \
                 rw: {rw},\n        \
                 enable: {en},\n        \
                 data: [{data}],\n    \
             }},\n    \
             keypad: KeypadPins {{\n        \
                 rows: [{rows}],\n        \
                 cols: [{cols}],\n    \
             }},\n    \
             buzzer: {buzzer},\n\
         }};\n\
         \n\
         pub const SCAN_MAP: ScanMap = ScanMap::new([\n    {map_rows},\n]);\n\
         \n\
         pub const SCAN_TIMING: ScanTiming = ScanTiming {{ settle_ms: {settle} }};\n\
         \n\
         pub const LCD_TIMING: LcdTiming = LcdTiming {{\n    \
             power_on_ms: {pon},\n    \
             pulse_us: {pulse},\n    \
             recovery_us: {rec},\n    \
             command_settle_us: {cmd},\n    \
             clear_settle_us: {clr},\n\
         }};\n\
         \n\
         pub const DISPLAY_GEOMETRY: DisplayGeometry = DisplayGeometry {{\n    \
             row_bases: [{base0:#04x}, {base1:#04x}],\n\
         }};\n\
         \n\
         pub const TONE: ToneConfig = ToneConfig {{ half_period_us: {half}, duration_ms: {dur} }};\n\
         \n\
         pub const SESSION_TIMING: SessionTiming = SessionTiming {{\n    \
             greeting_ms: {greet},\n    \
             confirmation_ms: {confirm},\n    \
             tally_ms: {tally},\n\
         }};\n",
        rs = pin_expr(&w.lcd.rs),
        rw = pin_expr(&w.lcd.rw),
        en = pin_expr(&w.lcd.enable),
        data = pin_list(&w.lcd.data),
        rows = pin_list(&w.keypad.rows),
        cols = pin_list(&w.keypad.cols),
        buzzer = buzzer,
        map_rows = map_rows,
        settle = s.settle_ms,
        pon = l.power_on_ms,
        pulse = l.pulse_us,
        rec = l.recovery_us,
        cmd = l.command_settle_us,
        clr = l.clear_settle_us,
        base0 = geometry.row_bases[0],
        base1 = geometry.row_bases[1],
        half = t.half_period_us,
        dur = t.duration_ms,
        greet = st.greeting_ms,
        confirm = st.confirmation_ms,
        tally = st.tally_ms,
    );

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("wiring.rs"), source).unwrap();
}
