//! `hcpub` publish command implementation.

use std::path::PathBuf;

use clap::Parser;
use hcpub_config::{CliSettings, Config};
use hcpub_zendesk::publisher::{AssociationReport, DryRunResult, PublishResult, dry_run};
use hcpub_zendesk::{ArticlePublisher, HelpCenterClient, PublishConfig, SourceDocument};

use crate::error::CliError;
use crate::output::Output;

/// Publish a Markdown document as a draft Zendesk Help Center article.
///
/// Images are read from `images/<document name>/` next to the document.
#[derive(Parser, Debug)]
#[command(name = "hcpub", version, about)]
pub(crate) struct PublishArgs {
    /// Markdown file to publish.
    #[arg(long)]
    mdfile: Option<PathBuf>,

    /// Title of the article as it should appear in the Help Center.
    #[arg(long)]
    title: String,

    /// Path to configuration file (default: auto-discover hcpub.toml).
    #[arg(short, long, env = "HCPUB_CONFIG")]
    config: Option<PathBuf>,

    /// Section to create the article in (overrides config).
    #[arg(long)]
    section: Option<String>,

    /// Preview the article without uploading anything.
    #[arg(long)]
    dry_run: bool,

    /// Exit with an error if any attachment fails to associate.
    #[arg(long)]
    strict: bool,

    /// Enable info-level logging.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl PublishArgs {
    /// Execute the publish command.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is missing, the configuration is
    /// invalid, or the upload or article creation fails. With `--strict`,
    /// a failed attachment association is an error too.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let mdfile = self
            .mdfile
            .as_deref()
            .ok_or_else(|| CliError::Validation("--mdfile is required".to_owned()))?;
        let document = SourceDocument::resolve(mdfile)?;
        output.step(&format!("Converting {}", document.path().display()));
        if let Some(warning) = missing_image_dir_warning(&document) {
            output.warning(&warning);
        }

        if self.dry_run {
            let result = dry_run(&document, &self.title)?;
            print_dry_run_result(&output, &result);
            return Ok(());
        }

        let cli_settings = CliSettings {
            section_id: self.section.clone(),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let zendesk = config.require_zendesk()?;

        let client = HelpCenterClient::from_config(zendesk);
        let publisher = ArticlePublisher::new(&client, PublishConfig::from_config(zendesk));

        output.step(&format!(
            "Uploading images from {}",
            document.image_dir().display()
        ));
        let result = publisher.publish(&document, &self.title)?;
        print_publish_result(&output, &result);

        check_association(&result.association, self.strict)
    }
}

/// Warning for a document whose image folder does not exist.
///
/// References to `images/<name>/...` stay local in that case.
fn missing_image_dir_warning(document: &SourceDocument) -> Option<String> {
    if document.has_image_dir() {
        return None;
    }
    Some(format!(
        "Warning: image directory {} not found, image references will not be rewritten",
        document.image_dir().display()
    ))
}

/// Fail on association failures when `strict` is set.
fn check_association(report: &AssociationReport, strict: bool) -> Result<(), CliError> {
    if strict && !report.is_complete() {
        return Err(CliError::Validation(format!(
            "{} attachment request(s) failed",
            report.failures.len()
        )));
    }
    Ok(())
}

fn print_dry_run_result(output: &Output, result: &DryRunResult) {
    output.highlight("\n[DRY RUN] Nothing uploaded.");
    output.field("Title", &result.title);
    output.field("HTML size", &format!("{} bytes", result.html.len()));
    output.field("Image directory", &result.image_dir.display().to_string());

    if result.image_names.is_empty() {
        output.info("\nNo images to upload.");
    } else {
        output.info(&format!("\nImages ({}):", result.image_names.len()));
        for name in &result.image_names {
            output.info(&format!("  -> {name}"));
        }
    }
}

fn print_publish_result(output: &Output, result: &PublishResult) {
    output.success("\nDraft article created!");
    output.field("ID", &result.article.id.to_string());
    output.field("Images uploaded", &result.images.len().to_string());

    if !result.images.is_empty() {
        output.field(
            "Attachments associated",
            &format!(
                "{} in {} request(s)",
                result.association.associated, result.association.requests
            ),
        );
    }

    for failure in &result.association.failures {
        output.warning(&format!(
            "Warning: could not associate attachments {:?}: {}",
            failure.attachment_ids, failure.error
        ));
    }

    output.info(&format!("\nThe article URL is: {}", result.url));
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use hcpub_zendesk::publisher::AssociationFailure;
    use hcpub_zendesk::{HelpCenterError, PublishError};

    fn failed_report() -> AssociationReport {
        AssociationReport {
            requests: 2,
            associated: 20,
            failures: vec![AssociationFailure {
                attachment_ids: vec![21, 22],
                error: HelpCenterError::HttpResponse {
                    status: 404,
                    body: "not found".to_owned(),
                },
            }],
        }
    }

    #[test]
    fn test_cli_definition_is_valid() {
        PublishArgs::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let args = PublishArgs::try_parse_from([
            "hcpub",
            "--mdfile",
            "docs/guide.md",
            "--title",
            "Getting Started",
            "--section",
            "42",
            "--strict",
        ])
        .unwrap();

        assert_eq!(args.mdfile, Some(PathBuf::from("docs/guide.md")));
        assert_eq!(args.title, "Getting Started");
        assert_eq!(args.section.as_deref(), Some("42"));
        assert!(args.strict);
        assert!(!args.dry_run);
    }

    #[test]
    fn test_title_is_required() {
        let err = PublishArgs::try_parse_from(["hcpub", "--mdfile", "a.md"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_missing_mdfile_flag_is_an_error() {
        let args = PublishArgs::try_parse_from(["hcpub", "--title", "T"]).unwrap();
        let err = args.execute().unwrap_err();
        assert!(matches!(err, CliError::Validation(_)));
    }

    #[test]
    fn test_missing_document_fails_before_config() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.md");
        let args = PublishArgs::try_parse_from([
            "hcpub",
            "--mdfile",
            missing.to_str().unwrap(),
            "--title",
            "T",
            "--config",
            "/nonexistent/hcpub.toml",
        ])
        .unwrap();

        let err = args.execute().unwrap_err();

        assert!(matches!(
            err,
            CliError::Publish(PublishError::DocumentNotFound(_))
        ));
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_dry_run_needs_no_config() {
        let dir = tempfile::tempdir().unwrap();
        let doc = dir.path().join("guide.md");
        std::fs::write(&doc, "# Guide\n").unwrap();
        let args = PublishArgs::try_parse_from([
            "hcpub",
            "--mdfile",
            doc.to_str().unwrap(),
            "--title",
            "T",
            "--config",
            "/nonexistent/hcpub.toml",
            "--dry-run",
        ])
        .unwrap();

        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_missing_config_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let doc = dir.path().join("guide.md");
        std::fs::write(&doc, "# Guide\n").unwrap();
        let args = PublishArgs::try_parse_from([
            "hcpub",
            "--mdfile",
            doc.to_str().unwrap(),
            "--title",
            "T",
            "--config",
            "/nonexistent/hcpub.toml",
        ])
        .unwrap();

        let err = args.execute().unwrap_err();

        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_strict_fails_on_association_failure() {
        let err = check_association(&failed_report(), true).unwrap_err();

        assert!(matches!(err, CliError::Validation(_)));
        assert_eq!(err.to_string(), "1 attachment request(s) failed");
    }

    #[test]
    fn test_association_failure_is_ok_without_strict() {
        assert!(check_association(&failed_report(), false).is_ok());
    }

    #[test]
    fn test_strict_passes_complete_association() {
        let report = AssociationReport {
            requests: 1,
            associated: 3,
            failures: Vec::new(),
        };

        assert!(check_association(&report, true).is_ok());
    }

    #[test]
    fn test_missing_image_dir_warns() {
        let dir = tempfile::tempdir().unwrap();
        let doc = dir.path().join("guide.md");
        std::fs::write(&doc, "").unwrap();
        let document = SourceDocument::resolve(&doc).unwrap();

        let warning = missing_image_dir_warning(&document).unwrap();

        assert!(warning.contains("images/guide"), "got: {warning}");
        assert!(warning.contains("not found"), "got: {warning}");
    }

    #[test]
    fn test_existing_image_dir_does_not_warn() {
        let dir = tempfile::tempdir().unwrap();
        let doc = dir.path().join("guide.md");
        std::fs::write(&doc, "").unwrap();
        std::fs::create_dir_all(dir.path().join("images/guide")).unwrap();
        let document = SourceDocument::resolve(&doc).unwrap();

        assert_eq!(missing_image_dir_warning(&document), None);
    }
}
