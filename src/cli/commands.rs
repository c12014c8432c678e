//! Subcommand implementations.

use super::Commands;
use anyhow::{Context, bail};
use spectre_config::presets::{presets_by_category, search_presets};
use spectre_config::schema::search_options;
use spectre_config::{
    Category, ConfigOption, ConfigStore, ConfigValue, ImportMode, OptionKind, PresetCategory,
    ShareLookup, Theme, all_options, find_option, find_preset, parse_value, presets, share,
};
use spectre_keybindings::{validate_config_keybinds, validate_keybind};
use std::io::{self, Read, Write};
use std::path::Path;

/// Execute `command` against `store`.
pub fn dispatch(store: &mut ConfigStore, command: Commands, out: &mut dyn Write) -> anyhow::Result<()> {
    match command {
        Commands::Options {
            category,
            search,
            modified,
        } => list_options(store, category.as_deref(), search.as_deref(), modified, out),
        Commands::Get { id } => get(store, &id, out),
        Commands::Set { id, values } => set(store, &id, &values, out),
        Commands::Reset { id, all } => reset(store, id.as_deref(), all, out),
        Commands::Export { output } => export(store, output.as_deref(), out),
        Commands::Import { path, replace } => import(store, &path, replace, out),
        Commands::Validate { entries } => validate(store, &entries, out),
        Commands::Share { origin } => {
            writeln!(out, "{}", store.share_url(&origin))?;
            Ok(())
        }
        Commands::OpenShare { link, replace } => open_share(store, &link, replace, out),
        Commands::Theme { path, name } => apply_theme(store, &path, name, out),
        Commands::Presets { category, search } => {
            list_presets(category.as_deref(), search.as_deref(), out)
        }
        Commands::Preset { id } => {
            let preset = find_preset(&id).with_context(|| {
                let ids: Vec<&str> = presets().iter().map(|p| p.id).collect();
                format!("Unknown preset: {id} (available: {})", ids.join(", "))
            })?;
            store.apply_preset(preset);
            writeln!(
                out,
                "Applied preset {} ({} option(s) set)",
                preset.name,
                store.modified_count()
            )?;
            Ok(())
        }
    }
}

/// Coerce command-line text into a value for `id`.
///
/// Repeatable options collect every argument into a list; other options take exactly
/// one. Enum values must be one of the declared choices and keybind entries must
/// validate. Unknown ids are kept as text.
pub fn coerce_value(id: &str, raw: &[String]) -> anyhow::Result<ConfigValue> {
    let Some(option) = find_option(id) else {
        log::warn!("{id} is not a known option; storing it as text");
        return Ok(ConfigValue::Text(raw.join(" ")));
    };

    if option.kind.is_repeatable() {
        let mut items = Vec::new();
        for text in raw {
            if let OptionKind::Keybind { .. } = option.kind {
                check_keybind(text)?;
            }
            if let Some(ConfigValue::List(mut parsed)) = parse_value(option, text) {
                items.append(&mut parsed);
            }
        }
        return Ok(ConfigValue::List(items));
    }

    let [text] = raw else {
        bail!("{id} takes a single value ({} given)", raw.len());
    };
    if let OptionKind::Enum { options, .. } = option.kind
        && !options.iter().any(|choice| choice.value == text.trim())
    {
        let valid: Vec<&str> = options.iter().map(|choice| choice.value).collect();
        bail!(
            "Invalid value {text:?} for {id}. Valid values: {}",
            valid.join(", ")
        );
    }
    parse_value(option, text)
        .with_context(|| format!("Invalid {} value for {id}: {text:?}", option.kind.name()))
}

fn check_keybind(entry: &str) -> anyhow::Result<()> {
    let result = validate_keybind(entry);
    for warning in &result.warnings {
        log::warn!("{warning}");
    }
    if !result.valid {
        bail!("Invalid keybind {entry:?}: {}", result.errors.join("; "));
    }
    Ok(())
}

fn write_value(out: &mut dyn Write, id: &str, value: &ConfigValue) -> io::Result<()> {
    match value {
        ConfigValue::List(items) if items.is_empty() => writeln!(out, "{id} ="),
        ConfigValue::List(items) => {
            for item in items {
                writeln!(out, "{id} = {item}")?;
            }
            Ok(())
        }
        other => writeln!(out, "{id} = {}", other.to_config_string()),
    }
}

fn list_options(
    store: &ConfigStore,
    category: Option<&str>,
    search: Option<&str>,
    modified_only: bool,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let category = category
        .map(|id| {
            Category::from_id(id).with_context(|| format!("Unknown category: {id}"))
        })
        .transpose()?;

    let options: Vec<&ConfigOption> = match search {
        Some(query) => search_options(query),
        None => all_options().iter().filter(|o| !o.hidden).collect(),
    };

    for option in options {
        if category.is_some_and(|c| c != option.category) {
            continue;
        }
        let modified = store.is_modified(option.id);
        if modified_only && !modified {
            continue;
        }
        let value = store
            .get_value(option.id)
            .map(|v| v.to_config_string())
            .unwrap_or_default();
        let marker = if modified { '*' } else { ' ' };
        writeln!(
            out,
            "{marker} {:<40} {:<9} {value}",
            option.id,
            option.kind.name()
        )?;
    }
    Ok(())
}

fn get(store: &ConfigStore, id: &str, out: &mut dyn Write) -> anyhow::Result<()> {
    let value = store
        .get_value(id)
        .with_context(|| format!("Unknown option: {id}"))?;
    write_value(out, id, &value)?;
    Ok(())
}

fn set(
    store: &mut ConfigStore,
    id: &str,
    raw: &[String],
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let value = coerce_value(id, raw)?;
    store.set_value(id, value);
    match store.get_value(id) {
        Some(value) if store.is_modified(id) => write_value(out, id, &value)?,
        _ => writeln!(out, "{id} is back to its default")?,
    }
    Ok(())
}

fn reset(
    store: &mut ConfigStore,
    id: Option<&str>,
    all: bool,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    match (id, all) {
        (_, true) => {
            store.reset_all();
            writeln!(out, "All options reset")?;
        }
        (Some(id), false) => {
            store.reset_value(id);
            writeln!(out, "{id} reset")?;
        }
        (None, false) => bail!("Give an option id or --all"),
    }
    Ok(())
}

fn export(store: &ConfigStore, output: Option<&Path>, out: &mut dyn Write) -> anyhow::Result<()> {
    let text = store.export_config();
    match output {
        Some(path) => {
            std::fs::write(path, &text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            writeln!(out, "Wrote {} option(s) to {}", store.modified_count(), path.display())?;
        }
        None => {
            out.write_all(text.as_bytes())?;
            if !text.is_empty() && !text.ends_with('\n') {
                writeln!(out)?;
            }
        }
    }
    Ok(())
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn import(
    store: &mut ConfigStore,
    path: &Path,
    replace: bool,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let text = read_input(path)?;
    let mode = if replace {
        ImportMode::Replace
    } else {
        ImportMode::Merge
    };
    let report = store.import_config_with(&text, mode);

    writeln!(out, "Imported {} key(s)", report.applied.len())?;
    if !report.unknown_keys.is_empty() {
        writeln!(out, "Unknown keys kept as-is: {}", report.unknown_keys.join(", "))?;
    }
    for line in &report.skipped_lines {
        writeln!(out, "Skipped line {line}")?;
    }
    Ok(())
}

fn validate(store: &ConfigStore, entries: &[String], out: &mut dyn Write) -> anyhow::Result<()> {
    let mut invalid = 0;

    if entries.is_empty() {
        for issue in validate_config_keybinds(&store.snapshot()) {
            invalid += 1;
            writeln!(
                out,
                "{} = {}: {}",
                issue.option,
                issue.entry,
                issue.result.errors.join("; ")
            )?;
        }
        if invalid == 0 {
            writeln!(out, "All stored keybinds are valid")?;
        }
    } else {
        for entry in entries {
            let result = validate_keybind(entry);
            if result.valid {
                writeln!(out, "ok      {entry}")?;
            } else {
                invalid += 1;
                writeln!(out, "invalid {entry}: {}", result.errors.join("; "))?;
            }
            for warning in &result.warnings {
                writeln!(out, "warning {entry}: {warning}")?;
            }
        }
    }

    if invalid > 0 {
        bail!("{invalid} invalid keybind(s)");
    }
    Ok(())
}

fn open_share(
    store: &mut ConfigStore,
    link: &str,
    replace: bool,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let link = link.trim();
    let lookup = if link.contains("://") {
        share::config_from_url(link)
    } else if link.contains("c=") {
        share::config_from_query(link)
    } else {
        match share::decode_config(link) {
            Some(shared) => ShareLookup::Loaded(shared),
            None => ShareLookup::Invalid,
        }
    };

    let shared = match lookup {
        ShareLookup::Loaded(shared) => shared,
        ShareLookup::Missing => bail!("No shared config found in {link:?}"),
        ShareLookup::Invalid => bail!("Shared config is corrupt or unsupported"),
    };

    if replace {
        store.reset_all();
    }
    store.load_config(&shared.config, shared.theme.as_deref());
    writeln!(out, "Loaded {} shared option(s)", shared.config.len())?;
    if let Some(theme) = &shared.theme {
        writeln!(out, "Theme: {theme}")?;
    }
    Ok(())
}

fn apply_theme(
    store: &mut ConfigStore,
    path: &Path,
    name: Option<String>,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let raw = read_input(path)?;
    let name = match name {
        Some(name) => name,
        None => path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .filter(|n| n != "-")
            .context("Give a theme name with --name when reading from stdin")?,
    };

    let theme = Theme::from_content(name, raw);
    store.apply_theme(&theme);
    writeln!(out, "Applied {} theme {}", theme.kind(), theme.name)?;
    Ok(())
}

fn list_presets(
    category: Option<&str>,
    search: Option<&str>,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let mut list = match category {
        Some(id) => {
            let category =
                PresetCategory::from_id(id).with_context(|| format!("Unknown preset category: {id}"))?;
            presets_by_category(category)
        }
        None => presets().iter().collect(),
    };
    if let Some(query) = search {
        let matches = search_presets(query);
        list.retain(|preset| matches.iter().any(|m| m.id == preset.id));
    }

    for preset in list {
        writeln!(
            out,
            "{:<14} {:<12} {}",
            preset.id,
            preset.category.id(),
            preset.description
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_coerce_number_and_bool() {
        assert_eq!(
            coerce_value("font-size", &args(&["14"])).unwrap(),
            ConfigValue::Number(14.0)
        );
        assert_eq!(
            coerce_value("copy-on-select", &args(&["true"])).unwrap(),
            ConfigValue::Bool(true)
        );
        assert!(coerce_value("font-size", &args(&["big"])).is_err());
        assert!(coerce_value("font-size", &args(&["1", "2"])).is_err());
    }

    #[test]
    fn test_coerce_enum_checks_choices() {
        assert_eq!(
            coerce_value("cursor-style", &args(&["bar"])).unwrap(),
            ConfigValue::Text("bar".into())
        );
        let err = coerce_value("cursor-style", &args(&["triangle"])).unwrap_err();
        assert!(err.to_string().contains("Valid values: block"));
    }

    #[test]
    fn test_coerce_repeatable() {
        assert_eq!(
            coerce_value("font-feature", &args(&["calt", "liga"])).unwrap(),
            ConfigValue::from(vec!["calt", "liga"])
        );
        assert!(coerce_value("keybind", &args(&["ctrl+c=copy_to_clipboard"])).is_ok());
        assert!(coerce_value("keybind", &args(&["ctrl+c=fly"])).is_err());
    }

    #[test]
    fn test_coerce_unknown_is_text() {
        assert_eq!(
            coerce_value("future-option", &args(&["a", "b"])).unwrap(),
            ConfigValue::Text("a b".into())
        );
    }
}
