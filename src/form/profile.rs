// src/form/profile.rs
//! Resume profiles: a form saved as YAML, TOML or JSON.

use anyhow::{Context, Result};
use std::path::Path;

use super::{FormField, FormState, InputKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileFormat {
    Yaml,
    Toml,
    Json,
}

impl ProfileFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .ok_or_else(|| anyhow::anyhow!("Profile has no extension: {}", path.display()))?;

        match ext.as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            _ => anyhow::bail!(
                "Unsupported profile format: {}. Use .yaml, .toml or .json",
                ext
            ),
        }
    }
}

pub fn parse_profile(content: &str, format: ProfileFormat) -> Result<FormState> {
    let form = match format {
        ProfileFormat::Yaml => {
            // An empty YAML document means an empty form.
            if content.trim().is_empty() {
                FormState::default()
            } else {
                serde_yaml::from_str(content).context("Failed to parse YAML profile")?
            }
        }
        ProfileFormat::Toml => toml::from_str(content).context("Failed to parse TOML profile")?,
        ProfileFormat::Json => {
            serde_json::from_str(content).context("Failed to parse JSON profile")?
        }
    };
    Ok(form)
}

pub async fn load_profile(path: &Path) -> Result<FormState> {
    let format = ProfileFormat::from_path(path)?;
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read profile: {}", path.display()))?;
    parse_profile(&content, format)
        .with_context(|| format!("Invalid profile: {}", path.display()))
}

/// Empty profile listing every field with its label as a comment.
pub fn profile_template(format: ProfileFormat) -> Result<String> {
    if format == ProfileFormat::Json {
        return serde_json::to_string_pretty(&FormState::default())
            .context("Failed to serialize profile template");
    }

    let assign = match format {
        ProfileFormat::Toml => " =",
        _ => ":",
    };

    let mut out = String::from("# Resume profile for resume-automation\n");
    for field in FormField::ALL {
        let required = if field.is_required() { " (required)" } else { "" };
        out.push('\n');
        out.push_str(&format!("# {}{}\n", field.label(), required));
        if FormField::SKILL_FIELDS.contains(&field) {
            out.push_str("# comma-separated\n");
        } else if matches!(field.kind(), InputKind::TextArea { .. }) {
            out.push_str("# free text, multi-line allowed\n");
        }
        out.push_str(&format!("{}{} \"\"\n", field.name(), assign));
    }
    Ok(out)
}

pub async fn write_profile_template(path: &Path, force: bool) -> Result<()> {
    if !force && tokio::fs::metadata(path).await.is_ok() {
        anyhow::bail!(
            "Profile already exists: {}. Use --force to overwrite",
            path.display()
        );
    }

    let format = ProfileFormat::from_path(path)?;
    let content = profile_template(format)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    tokio::fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write profile: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            ProfileFormat::from_path(&PathBuf::from("me.YML")).unwrap(),
            ProfileFormat::Yaml
        );
        assert_eq!(
            ProfileFormat::from_path(&PathBuf::from("me.toml")).unwrap(),
            ProfileFormat::Toml
        );
        assert!(ProfileFormat::from_path(&PathBuf::from("me.txt")).is_err());
        assert!(ProfileFormat::from_path(&PathBuf::from("me")).is_err());
    }

    #[test]
    fn test_parse_yaml_with_aliases() {
        let yaml = "fullName: Ada Lovelace\nemail: ada@example.com\ntechnical_skills: Rust, SQL\nexperience: |\n  Engineer | Analytical Engines | 1842\n  Wrote the first program\n";
        let form = parse_profile(yaml, ProfileFormat::Yaml).unwrap();
        assert_eq!(form.get(FormField::FullName), "Ada Lovelace");
        assert_eq!(form.skills(), vec!["Rust", "SQL"]);
        assert!(form.get(FormField::Experience).contains("Wrote the first program"));
        assert_eq!(form.get(FormField::Phone), "");
    }

    #[test]
    fn test_parse_toml() {
        let toml = "full_name = \"Grace\"\nsoftSkills = \"Teaching\"\n";
        let form = parse_profile(toml, ProfileFormat::Toml).unwrap();
        assert_eq!(form.get(FormField::FullName), "Grace");
        assert_eq!(form.get(FormField::SoftSkills), "Teaching");
    }

    #[test]
    fn test_unknown_profile_key_is_rejected() {
        assert!(parse_profile("salary: 10\n", ProfileFormat::Yaml).is_err());
    }

    #[test]
    fn test_empty_yaml_is_empty_form() {
        assert_eq!(
            parse_profile("", ProfileFormat::Yaml).unwrap(),
            FormState::default()
        );
    }

    #[test]
    fn test_templates_parse_back_to_empty_form() {
        for format in [ProfileFormat::Yaml, ProfileFormat::Toml, ProfileFormat::Json] {
            let template = profile_template(format).unwrap();
            assert_eq!(
                parse_profile(&template, format).unwrap(),
                FormState::default(),
                "{:?}",
                format
            );
        }
    }

    #[tokio::test]
    async fn test_write_template_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles").join("me.yaml");

        write_profile_template(&path, false).await.unwrap();
        assert!(write_profile_template(&path, false).await.is_err());
        write_profile_template(&path, true).await.unwrap();

        let form = load_profile(&path).await.unwrap();
        assert_eq!(form, FormState::default());
    }
}
