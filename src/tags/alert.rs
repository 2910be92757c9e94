use std::io::Write;

use liquid_core::{
    BlockReflection, Language, ParseBlock, Renderable, Result, Runtime, TagBlock, TagTokenIter,
    Template,
};

use super::TagSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AlertKind {
    Success,
    Danger,
    Warning,
    Info,
}

impl AlertKind {
    fn from_arg(arg: &str) -> Self {
        match arg {
            "success" => Self::Success,
            "danger" => Self::Danger,
            "warning" => Self::Warning,
            "info" => Self::Info,
            other => {
                tracing::warn!("alert type '{}' not supported, defaulting to info", other);
                Self::Info
            }
        }
    }

    fn class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Self::Success => r#"<i class="fa fa-check-circle"></i> <b>Success:</b>"#,
            Self::Danger => r#"<i class="fa fa-exclamation-triangle"></i> <b>Danger:</b>"#,
            Self::Warning => r#"<i class="fa fa-exclamation-circle"></i> <b>Warning:</b>"#,
            Self::Info => r#"<i class="fa fa-info-circle"></i> <b>Note:</b>"#,
        }
    }
}

/// A Bootstrap alert. The body is inline markdown, so paragraphs merge.
#[derive(Clone, Debug)]
pub(super) struct AlertBlock {
    session: TagSession,
}

impl AlertBlock {
    pub(super) fn new(session: TagSession) -> Self {
        Self { session }
    }
}

impl BlockReflection for AlertBlock {
    fn start_tag(&self) -> &str {
        "alert"
    }

    fn end_tag(&self) -> &str {
        "endalert"
    }

    fn description(&self) -> &str {
        "A Bootstrap alert: success, danger, warning or info"
    }
}

impl ParseBlock for AlertBlock {
    fn parse(
        &self,
        arguments: TagTokenIter<'_>,
        mut tokens: TagBlock<'_, '_>,
        options: &Language,
    ) -> Result<Box<dyn Renderable>> {
        let kind = arguments
            .map(|token| token.as_str().to_string())
            .collect::<Vec<_>>()
            .join(" ");

        let body = Template::new(tokens.parse_all(options)?);
        tokens.assert_empty();

        Ok(Box::new(Alert {
            kind: AlertKind::from_arg(&kind),
            body,
            session: self.session.clone(),
        }))
    }

    fn reflection(&self) -> &dyn BlockReflection {
        self
    }
}

#[derive(Debug)]
struct Alert {
    kind: AlertKind,
    body: Template,
    session: TagSession,
}

impl Renderable for Alert {
    fn render_to(&self, writer: &mut dyn Write, runtime: &dyn Runtime) -> Result<()> {
        self.session.render_block(writer, runtime, || {
            let text = self.body.render(runtime)?;
            let content = self.session.markdown_span(&text)?;
            Ok(format!(
                r#"<div class="alert alert-{}" role="alert">{} {}</div>"#,
                self.kind.class(),
                self.kind.icon(),
                content
            ))
        })
    }
}
