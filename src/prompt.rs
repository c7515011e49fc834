use std::env;
use std::ffi::CStr;

use inksac::prelude::*;

pub const CONTINUATION: &str = "> ";

#[derive(Debug, Clone, Copy)]
pub struct PromptRenderer {
    color_support: ColorSupport,
}

impl Default for PromptRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptRenderer {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    /// `user@pish cwd$ `
    pub fn render(&self) -> String {
        let cwd = env::current_dir()
            .map(|dir| dir.display().to_string())
            .unwrap_or_else(|_| "?".to_string());
        self.render_parts(&user_name(), &cwd)
    }

    fn render_parts(&self, user: &str, cwd: &str) -> String {
        let identity = format!("{}@pish", user);
        if matches!(self.color_support, ColorSupport::NoColor) {
            return format!("{} {}$ ", identity, cwd);
        }

        let user_style = Style::builder().foreground(Color::Magenta).build();
        let dir_style = Style::builder().foreground(Color::Blue).build();
        format!(
            "{} {}$ ",
            identity.style(user_style).to_string(),
            cwd.to_string().style(dir_style).to_string()
        )
    }
}

fn user_name() -> String {
    let entry = unsafe { libc::getpwuid(libc::getuid()) };
    if !entry.is_null() {
        let name = unsafe { (*entry).pw_name };
        if !name.is_null() {
            return unsafe { CStr::from_ptr(name) }.to_string_lossy().into_owned();
        }
    }
    env::var("USER").unwrap_or_else(|_| "user".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_prompt() {
        let renderer = PromptRenderer {
            color_support: ColorSupport::NoColor,
        };
        assert_eq!(renderer.render_parts("ada", "/tmp"), "ada@pish /tmp$ ");
    }

    #[test]
    fn test_colored_prompt_keeps_text() {
        let renderer = PromptRenderer {
            color_support: ColorSupport::TrueColor,
        };
        let prompt = renderer.render_parts("ada", "/tmp");
        assert!(prompt.contains("ada@pish"));
        assert!(prompt.contains("/tmp"));
        assert!(prompt.ends_with("$ "));
    }
}
