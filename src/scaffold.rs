//! Scaffold orchestration.
//! Runs the stages of a scaffold strictly in order. The first failing stage
//! aborts the run and whatever was written so far stays on disk.

use crate::config::Config;
use crate::constants::{
    COMMON_DIR, ENTRY_HTML, GITIGNORE, GITIGNORE_SAMPLE, PACKAGE_MANIFEST, README, TEMPLATE_SUFFIX,
};
use crate::context::{application_name, resolve, validate_destination, Answers};
use crate::copier::{copy_tree, CopySpec};
use crate::error::StageError;
use crate::ignore::parse_ignore_file;
use crate::prompt::Prompter;
use crate::registry::{Language, TemplateRegistry};
use crate::renderer::{MiniJinjaRenderer, TemplateRenderer};
use crate::writer::{copy_if_absent, write_if_absent, Outcome};
use log::info;
use std::fmt;
use std::path::{Path, PathBuf};

/// Stages of a scaffold run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    CollectAnswers,
    SelectTemplate,
    BuildContext,
    CopyTree,
    RenderManifest,
    RenderReadme,
    RenderEntryHtml,
    CopyGitignore,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// One file produced by a scaffold run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub outcome: Outcome,
    pub target: PathBuf,
}

/// Summary of a completed scaffold.
#[derive(Debug, Clone)]
pub struct Report {
    /// `<invocation dir>/<applicationName>`
    pub destination: PathBuf,
    pub application_name: String,
    pub language: Language,
    /// Every file the run created or skipped, in the order it was handled
    pub actions: Vec<Action>,
}

type StageResult<T> = std::result::Result<T, StageError>;

trait AtStage<T> {
    fn at(self, stage: Stage) -> StageResult<T>;
}

impl<T> AtStage<T> for crate::error::Result<T> {
    fn at(self, stage: Stage) -> StageResult<T> {
        self.map_err(|source| StageError { stage, source })
    }
}

/// Produces scaffolds from a loaded template registry.
pub struct Scaffolder<'a> {
    registry: &'a TemplateRegistry,
    config: &'a Config,
    templates_root: PathBuf,
    /// Directory every destination is relative to
    base_dir: PathBuf,
    renderer: Box<dyn TemplateRenderer>,
}

impl<'a> Scaffolder<'a> {
    pub fn new<P: AsRef<Path>, B: AsRef<Path>>(
        registry: &'a TemplateRegistry,
        config: &'a Config,
        templates_root: P,
        base_dir: B,
    ) -> Self {
        Self {
            registry,
            config,
            templates_root: templates_root.as_ref().to_path_buf(),
            base_dir: base_dir.as_ref().to_path_buf(),
            renderer: Box::new(MiniJinjaRenderer::new()),
        }
    }

    /// Replaces the default MiniJinja renderer.
    pub fn with_renderer(mut self, renderer: Box<dyn TemplateRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Collects answers from `prompter`, then runs [`Scaffolder::scaffold`].
    pub fn run(&self, prompter: &dyn Prompter, language: Language) -> StageResult<Report> {
        info!("Stage {}", Stage::CollectAnswers);
        let answers = prompter.answers().at(Stage::CollectAnswers)?;
        self.scaffold(&answers, language)
    }

    /// Materializes the selected template set into `<base_dir>/<applicationName>`.
    ///
    /// The application name is validated before anything touches the disk.
    ///
    /// # Errors
    /// * `StageError` naming the failed stage and carrying the underlying error
    pub fn scaffold(&self, answers: &Answers, language: Language) -> StageResult<Report> {
        let name = application_name(answers).at(Stage::CollectAnswers)?;
        validate_destination(name).at(Stage::CollectAnswers)?;

        info!("Stage {}", Stage::SelectTemplate);
        let template_set = self.registry.select(language);

        info!("Stage {}", Stage::BuildContext);
        let context = resolve(answers, template_set, self.config).at(Stage::BuildContext)?;
        let context = context.to_value();

        let destination = self.base_dir.join(name);
        let mut actions = Vec::new();

        info!("Stage {}", Stage::CopyTree);
        let exclude_patterns = parse_ignore_file(&template_set.root_path).at(Stage::CopyTree)?;
        let copy_spec = CopySpec {
            source_root: template_set.root_path.clone(),
            destination_root: destination.clone(),
            include_dotfiles: true,
            exclude_patterns,
        };
        let copied = copy_tree(&copy_spec).at(Stage::CopyTree)?;
        actions.extend(copied.into_iter().map(|(target, outcome)| Action { outcome, target }));

        for (stage, file_name) in [
            (Stage::RenderManifest, PACKAGE_MANIFEST),
            (Stage::RenderReadme, README),
            (Stage::RenderEntryHtml, ENTRY_HTML),
        ] {
            info!("Stage {stage}");
            let template_file = self
                .templates_root
                .join(COMMON_DIR)
                .join(format!("{file_name}{TEMPLATE_SUFFIX}"));
            let target = destination.join(file_name);
            let outcome = write_if_absent(&*self.renderer, &template_file, &target, &context)
                .at(stage)?;
            actions.push(Action { outcome, target });
        }

        info!("Stage {}", Stage::CopyGitignore);
        let target = destination.join(GITIGNORE);
        let outcome = copy_if_absent(&template_set.root_path.join(GITIGNORE_SAMPLE), &target)
            .at(Stage::CopyGitignore)?;
        actions.push(Action { outcome, target });

        info!("Stage {}", Stage::Done);
        Ok(Report {
            destination,
            application_name: name.to_string(),
            language,
            actions,
        })
    }
}
