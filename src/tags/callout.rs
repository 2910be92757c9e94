use std::io::Write;

use liquid_core::{
    BlockReflection, Language, ParseBlock, Renderable, Result, Runtime, TagBlock, TagTokenIter,
    Template,
};

use super::TagSession;

const CALLOUT_TYPES: [&str; 5] = ["primary", "success", "info", "danger", "warning"];
const DEFAULT_TYPE: &str = "default";

/// A bordered callout box around block markdown.
#[derive(Clone, Debug)]
pub(super) struct CalloutBlock {
    session: TagSession,
}

impl CalloutBlock {
    pub(super) fn new(session: TagSession) -> Self {
        Self { session }
    }
}

impl BlockReflection for CalloutBlock {
    fn start_tag(&self) -> &str {
        "callout"
    }

    fn end_tag(&self) -> &str {
        "endcallout"
    }

    fn description(&self) -> &str {
        "A bordered callout box"
    }
}

impl ParseBlock for CalloutBlock {
    fn parse(
        &self,
        arguments: TagTokenIter<'_>,
        mut tokens: TagBlock<'_, '_>,
        options: &Language,
    ) -> Result<Box<dyn Renderable>> {
        let requested = arguments
            .map(|token| token.as_str().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let kind = callout_kind(&requested);

        let body = Template::new(tokens.parse_all(options)?);
        tokens.assert_empty();

        Ok(Box::new(Callout {
            kind,
            body,
            session: self.session.clone(),
        }))
    }

    fn reflection(&self) -> &dyn BlockReflection {
        self
    }
}

fn callout_kind(requested: &str) -> &'static str {
    CALLOUT_TYPES
        .iter()
        .copied()
        .find(|kind| *kind == requested)
        .unwrap_or_else(|| {
            tracing::warn!(
                "callout type '{}' not supported, defaulting to {}",
                requested,
                DEFAULT_TYPE
            );
            DEFAULT_TYPE
        })
}

#[derive(Debug)]
struct Callout {
    kind: &'static str,
    body: Template,
    session: TagSession,
}

impl Renderable for Callout {
    fn render_to(&self, writer: &mut dyn Write, runtime: &dyn Runtime) -> Result<()> {
        self.session.render_block(writer, runtime, || {
            let text = self.body.render(runtime)?;
            let content = self.session.markdown(&text)?;
            Ok(format!(
                r#"<div class="bs-callout bs-callout-{}">{}</div>"#,
                self.kind,
                content.trim_end()
            ))
        })
    }
}
