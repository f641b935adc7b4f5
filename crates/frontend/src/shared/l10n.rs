//! Message table for the settings pages
//!
//! Messages are looked up by their dotted key. Unknown keys fall back to the
//! key itself so a missing entry is visible on the page instead of blank.
//! Messages may contain a single `{name}` placeholder that the caller fills
//! with markup, see [`split_placeholder`].

/// Look up a message by key
pub fn translate(key: &str) -> String {
    message(key).map(str::to_string).unwrap_or_else(|| key.to_string())
}

/// Look up `<prefix>.<id>` (and further dotted parts)
pub fn translate_parts(parts: &[&str]) -> String {
    translate(&parts.join("."))
}

/// Split a message around `{name}`, returning the text before and after it.
///
/// Returns `None` when the placeholder is absent.
pub fn split_placeholder<'a>(text: &'a str, name: &str) -> Option<(&'a str, &'a str)> {
    let token = format!("{{{}}}", name);
    text.split_once(token.as_str())
}

fn message(key: &str) -> Option<&'static str> {
    let text = match key {
        "learn_more" => "Learn More",
        "save" => "Save",
        "reset_verb" => "Reset",
        "settings.default" => "(default)",
        "settings.state.saved" => "Saved!",
        "settings.pr_decoration.binding.title" => "Pull Request Decoration",
        "settings.pr_decoration.binding.description" => {
            "Enable Pull Request Decoration for this project. Analysis results for pull requests will be posted back to the selected ALM instance."
        }
        "settings.pr_decoration.binding.no_bindings" => {
            "Pull Request Decoration has not been set up for this instance. Ask an administrator to set it up in the global settings. {link}"
        }
        "settings.pr_decoration.binding.form.name" => "Configuration name",
        "settings.pr_decoration.binding.form.select" => "Select a configuration",
        "settings.pr_decoration.binding.form.bitbucket.repository" => "Project Key",
        "settings.pr_decoration.binding.form.bitbucket.repository.help" => {
            "The project key is part of the Bitbucket Server repository URL. Example: {example}"
        }
        "settings.pr_decoration.binding.form.bitbucket.slug" => "Repository SLUG",
        "settings.pr_decoration.binding.form.bitbucket.slug.help" => {
            "The repository slug is part of the Bitbucket Server repository URL. Example: {example}"
        }
        "settings.pr_decoration.binding.form.github.repository" => "Repository identifier",
        "settings.pr_decoration.binding.form.github.repository.help" => {
            "The repository identifier is made of the owner and the repository name. Example: {example}"
        }
        "settings.pr_decoration.binding.form.github.summary_comment_setting" => {
            "Enable analysis summary under the GitHub Conversation tab"
        }
        "settings.pr_decoration.binding.form.github.summary_comment_setting.help" => {
            "When enabled, an analysis summary is also posted as a comment in the Conversation tab of the pull request."
        }
        "settings.pr_decoration.binding.form.gitlab.repository" => "Project ID",
        _ => return None,
    };
    Some(text)
}
