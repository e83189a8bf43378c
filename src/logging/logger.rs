use colored::Colorize;

pub fn log_section(title: &str) {
    eprintln!("{}", "━".repeat(50).bright_black());
    eprintln!("{}", title.bright_blue().bold());
    eprintln!("{}", "━".repeat(50).bright_black());
}

pub fn log_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message);
}

pub fn log_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue(), message);
}

pub fn log_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

pub fn log_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}
