use std::path::Path;

use hashdeploy::config::ConfigWarning;

pub fn print_config_warnings(path: &Path, warnings: &[ConfigWarning]) {
    for warning in warnings {
        eprintln!("{}", render_config_warning(path, warning));
    }
}

fn render_config_warning(path: &Path, warning: &ConfigWarning) -> String {
    let location = match warning.line {
        Some(line) => format!("{}:{}", path.display(), line),
        None => path.display().to_string(),
    };
    let mut rendered = format!(
        "⚠ Unknown config key '{}' in {} (ignored)",
        warning.key, location
    );
    if let Some(suggestion) = &warning.suggestion {
        rendered.push_str(&format!("\n   Did you mean '{suggestion}'?"));
    }
    rendered
}
