//! Command-line stand-in for the editor shell: each command loads the saved
//! theme, performs one store operation and prints the result.

use std::io::Write;
use std::path::PathBuf;

use crate::color::{
    contrast_ratio, is_accessible, normalize_hex_input, AccessibilityLevel, ColorError, HexColor,
};
use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::storage::ThemeStorage;
use crate::sync::CssVariableSync;
use crate::theme::{
    HexCommit, HexField, Preset, ThemeScope, ThemeStore, TokenKey, EXPORT_MIME_TYPE,
};

pub const USAGE: &str = "\
usage: m3-theme-editor <command>

commands:
  show                              print light and dark token values
  css                               print the CSS custom properties for both modes
  preset <default|blue|green|orange>
  set <token> <hex> [light|dark|both]
  hex <token> <text>                commit text as if typed into the token's hex field
  dark-bg <hex>                     override the dark background/surface pair
  reset                             apply the default preset
  reset-dark                        restore the default dark scheme
  random                            generate a random theme
  export [dir]                      write the light theme as JSON
  import <file>                     apply a theme JSON file
  contrast <bg> <fg> [AA|AAA|AA-large|AAA-large]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Show,
    Css,
    Preset(String),
    Set {
        token: TokenKey,
        color: String,
        scope: ThemeScope,
    },
    Hex {
        token: TokenKey,
        text: String,
    },
    DarkBackground(String),
    Reset,
    ResetDark,
    Random,
    Export(Option<PathBuf>),
    Import(PathBuf),
    Contrast {
        background: String,
        foreground: String,
        level: AccessibilityLevel,
    },
}

impl Command {
    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> AppResult<Self> {
        let args: Vec<String> = args.into_iter().collect();
        let words: Vec<&str> = args.iter().map(String::as_str).collect();

        let command = match words.as_slice() {
            [] | ["help" | "-h" | "--help"] => Self::Help,
            ["show"] => Self::Show,
            ["css"] => Self::Css,
            ["preset", name] => Self::Preset((*name).to_string()),
            ["set", token, color] => Self::Set {
                token: TokenKey::from_name(token),
                color: (*color).to_string(),
                scope: ThemeScope::Both,
            },
            ["set", token, color, scope] => Self::Set {
                token: TokenKey::from_name(token),
                color: (*color).to_string(),
                scope: scope.parse().map_err(AppError::Usage)?,
            },
            ["hex", token, text] => Self::Hex {
                token: TokenKey::from_name(token),
                text: (*text).to_string(),
            },
            ["dark-bg", color] => Self::DarkBackground((*color).to_string()),
            ["reset"] => Self::Reset,
            ["reset-dark"] => Self::ResetDark,
            ["random"] => Self::Random,
            ["export"] => Self::Export(None),
            ["export", dir] => Self::Export(Some(PathBuf::from(dir))),
            ["import", file] => Self::Import(PathBuf::from(file)),
            ["contrast", background, foreground] => Self::Contrast {
                background: (*background).to_string(),
                foreground: (*foreground).to_string(),
                level: AccessibilityLevel::default(),
            },
            ["contrast", background, foreground, level] => Self::Contrast {
                background: (*background).to_string(),
                foreground: (*foreground).to_string(),
                level: AccessibilityLevel::from_name_or_default(level),
            },
            other => {
                return Err(AppError::Usage(format!(
                    "unrecognized arguments: {}\n\n{USAGE}",
                    other.join(" ")
                )))
            }
        };
        Ok(command)
    }
}

pub fn execute<S, W>(
    command: Command,
    store: &mut ThemeStore<S, CssVariableSync>,
    config: &AppConfig,
    out: &mut W,
) -> AppResult<()>
where
    S: ThemeStorage,
    W: Write,
{
    match command {
        Command::Help => writeln!(out, "{USAGE}")?,
        Command::Show => write_table(store, out)?,
        Command::Css => write!(out, "{}", store.sync().render_stylesheet())?,
        Command::Preset(name) => {
            let preset: Preset = name.parse()?;
            store.apply(preset);
            writeln!(out, "applied preset {preset}")?;
        }
        Command::Set {
            token,
            color,
            scope,
        } => {
            let color = parse_color_arg(&color)?;
            store.set_color(token.clone(), color, scope);
            store.save_theme()?;
            writeln!(out, "{token} = {color}")?;
        }
        Command::Hex { token, text } => {
            let current = store.light().get(&token).unwrap_or(HexColor::BLACK);
            let mut field =
                HexField::new(token.clone(), current).with_revert_delay(config.hex_revert_delay());
            match store.commit_hex_field(&mut field, &text) {
                HexCommit::Accepted(color) => writeln!(out, "{token} = {color}")?,
                HexCommit::Restored(color) => writeln!(out, "{token} unchanged ({color})")?,
                HexCommit::Invalid {
                    revert_to,
                    revert_after,
                } => {
                    writeln!(
                        out,
                        "{token}: invalid color {text:?}, reverting to {revert_to} after {}ms",
                        revert_after.as_millis()
                    )?;
                    field.revert(revert_to);
                }
            }
        }
        Command::DarkBackground(color) => {
            let color = parse_color_arg(&color)?;
            store.set_dark_background(&color.to_string());
            writeln!(out, "dark background = {}", store.dark_background())?;
        }
        Command::Reset => {
            store.reset_to_default();
            writeln!(out, "applied preset {}", Preset::Default)?;
        }
        Command::ResetDark => {
            store.reset_dark_to_default();
            write_table(store, out)?;
        }
        Command::Random => {
            store.generate_random();
            writeln!(out, "{}", store.export_theme()?)?;
        }
        Command::Export(dir) => {
            let dir = dir.unwrap_or_else(|| PathBuf::from("."));
            let path = store.export_to_dir(&dir, config.export_file_name())?;
            writeln!(out, "exported {} ({EXPORT_MIME_TYPE})", path.display())?;
        }
        Command::Import(path) => {
            if !store.import_from_path(&path)? {
                return Err(AppError::ImportFailed(path));
            }
            writeln!(out, "imported {}", path.display())?;
        }
        Command::Contrast {
            background,
            foreground,
            level,
        } => {
            let background = parse_color_arg(&background)?;
            let foreground = parse_color_arg(&foreground)?;
            let ratio = contrast_ratio(background, foreground);
            let verdict = if is_accessible(background, foreground, level) {
                "pass"
            } else {
                "fail"
            };
            writeln!(out, "{ratio:.2}:1 {} {verdict}", level.as_str())?;
        }
    }
    Ok(())
}

/// Command-line colors get the same leniency as the editor's hex fields.
fn parse_color_arg(raw: &str) -> AppResult<HexColor> {
    normalize_hex_input(raw).ok_or_else(|| {
        AppError::Color(ColorError::InvalidFormat {
            value: raw.to_string(),
        })
    })
}

fn write_table<S: ThemeStorage, W: Write>(
    store: &ThemeStore<S, CssVariableSync>,
    out: &mut W,
) -> AppResult<()> {
    writeln!(out, "{:<24} {:<8} {:<8}", "token", "light", "dark")?;
    for (token, light) in store.light().iter() {
        let dark = store
            .dark()
            .get(token)
            .map_or_else(|| "-".to_string(), |color| color.to_string());
        writeln!(out, "{:<24} {:<8} {:<8}", token.name(), light.to_string(), dark)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStorage, THEME_STORAGE_KEY};
    use crate::theme::ColorToken;

    fn args(line: &str) -> Vec<String> {
        line.split_whitespace().map(str::to_string).collect()
    }

    fn run(line: &str, store: &mut ThemeStore<MemoryStorage, CssVariableSync>) -> AppResult<String> {
        let command = Command::parse(args(line))?;
        let mut out = Vec::new();
        execute(command, store, &AppConfig::default(), &mut out)?;
        Ok(String::from_utf8(out).expect("output should be utf-8"))
    }

    fn store() -> ThemeStore<MemoryStorage, CssVariableSync> {
        ThemeStore::new(MemoryStorage::new(), CssVariableSync::default())
    }

    #[test]
    fn parse_recognizes_commands_and_optional_arguments() {
        assert_eq!(Command::parse(args("")).unwrap(), Command::Help);
        assert_eq!(
            Command::parse(args("set primary #112233 dark")).unwrap(),
            Command::Set {
                token: ColorToken::Primary.into(),
                color: "#112233".to_string(),
                scope: ThemeScope::Dark,
            }
        );
        assert_eq!(
            Command::parse(args("contrast #FFF #000 AAA")).unwrap(),
            Command::Contrast {
                background: "#FFF".to_string(),
                foreground: "#000".to_string(),
                level: AccessibilityLevel::Aaa,
            }
        );
        assert_eq!(Command::parse(args("export")).unwrap(), Command::Export(None));
    }

    #[test]
    fn parse_rejects_unknown_commands_and_scopes() {
        assert!(matches!(
            Command::parse(args("paint it black")),
            Err(AppError::Usage(_))
        ));
        assert!(matches!(
            Command::parse(args("set primary #000000 sepia")),
            Err(AppError::Usage(_))
        ));
    }

    #[test]
    fn set_command_normalizes_and_persists() {
        let mut store = store();
        let output = run("set primary 123", &mut store).unwrap();
        assert_eq!(output, "primary = #112233\n");
        assert!(store.storage().get(THEME_STORAGE_KEY).is_some());
        assert!(matches!(
            run("set primary nope", &mut store),
            Err(AppError::Color(_))
        ));
    }

    #[test]
    fn unknown_preset_is_reported_on_the_command_line() {
        let mut store = store();
        assert!(matches!(
            run("preset purple", &mut store),
            Err(AppError::Theme(_))
        ));
        assert_eq!(run("preset blue", &mut store).unwrap(), "applied preset blue\n");
    }

    #[test]
    fn hex_command_follows_hex_field_rules() {
        let mut store = store();
        assert_eq!(
            run("hex secondary #abc", &mut store).unwrap(),
            "secondary = #AABBCC\n"
        );
        assert!(store.storage().get(THEME_STORAGE_KEY).is_some());

        let config = AppConfig {
            hex_revert_delay_ms: Some(500),
            ..AppConfig::default()
        };
        let mut out = Vec::new();
        let command = Command::parse(args("hex secondary zzz")).unwrap();
        execute(command, &mut store, &config, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "secondary: invalid color \"zzz\", reverting to #AABBCC after 500ms\n"
        );
        assert_eq!(store.light().token(ColorToken::Secondary), Some(HexColor::from_u32(0xAABBCC)));
    }

    #[test]
    fn css_command_prints_both_modes() {
        let mut store = store();
        let css = run("css", &mut store).unwrap();
        assert!(css.contains(":root {\n"));
        assert!(css.contains("  --md-sys-color-primary: #6750A4;\n"));
        assert!(css.contains(".dark-view {\n"));
        assert!(css.contains("  --md-sys-color-primary: #D0BCFF;\n"));
    }

    #[test]
    fn contrast_command_reports_ratio_and_verdict() {
        let mut store = store();
        assert_eq!(
            run("contrast #FFFFFF #000000 AAA", &mut store).unwrap(),
            "21.00:1 AAA pass\n"
        );
    }

    #[test]
    fn contrast_command_treats_unknown_level_as_aa() {
        let mut store = store();
        assert_eq!(
            Command::parse(args("contrast #FFFFFF #000000 AAAA")).unwrap(),
            Command::Contrast {
                background: "#FFFFFF".to_string(),
                foreground: "#000000".to_string(),
                level: AccessibilityLevel::Aa,
            }
        );
        assert_eq!(
            run("contrast #777777 #FFFFFF AAAA", &mut store).unwrap(),
            "4.48:1 AA fail\n"
        );
    }

    #[test]
    fn show_command_lists_every_token() {
        let mut store = store();
        let table = run("show", &mut store).unwrap();
        assert_eq!(table.lines().count(), 1 + ColorToken::ALL.len());
        assert!(table.contains("primary                  #6750A4  #D0BCFF"));
    }
}
