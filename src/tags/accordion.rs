//! Bootstrap accordion: `accordion` holds a run of `collapse` cards.

use std::io::Write;

use liquid_core::{
    BlockReflection, Error, Language, ParseBlock, Renderable, Result, Runtime, TagBlock,
    TagTokenIter, Template,
};

use super::TagSession;

/// An open accordion: its element id and the index of the next card.
#[derive(Debug)]
struct AccordionScope {
    id: String,
    next_index: usize,
}

/// Accordions being rendered, innermost last.
#[derive(Debug, Default)]
struct AccordionScopes(Vec<AccordionScope>);

#[derive(Clone, Debug)]
pub(super) struct AccordionBlock {
    session: TagSession,
}

impl AccordionBlock {
    pub(super) fn new(session: TagSession) -> Self {
        Self { session }
    }
}

impl BlockReflection for AccordionBlock {
    fn start_tag(&self) -> &str {
        "accordion"
    }

    fn end_tag(&self) -> &str {
        "endaccordion"
    }

    fn description(&self) -> &str {
        "A Bootstrap accordion holding `collapse` cards"
    }
}

impl ParseBlock for AccordionBlock {
    fn parse(
        &self,
        mut arguments: TagTokenIter<'_>,
        mut tokens: TagBlock<'_, '_>,
        options: &Language,
    ) -> Result<Box<dyn Renderable>> {
        let name = arguments
            .expect_next("expected a single accordion id")?
            .as_str()
            .to_string();
        if arguments.next().is_some() {
            return Err(arguments.raise_error("expected a single accordion id"));
        }

        let body = Template::new(tokens.parse_all(options)?);
        tokens.assert_empty();

        Ok(Box::new(Accordion {
            id: format!("accordion-{}", name),
            body,
            session: self.session.clone(),
        }))
    }

    fn reflection(&self) -> &dyn BlockReflection {
        self
    }
}

#[derive(Debug)]
struct Accordion {
    id: String,
    body: Template,
    session: TagSession,
}

impl Renderable for Accordion {
    fn render_to(&self, writer: &mut dyn Write, runtime: &dyn Runtime) -> Result<()> {
        self.session.render_block(writer, runtime, || {
            runtime
                .registers()
                .get_mut::<AccordionScopes>()
                .0
                .push(AccordionScope {
                    id: self.id.clone(),
                    next_index: 1,
                });
            let content = self.body.render(runtime);
            runtime.registers().get_mut::<AccordionScopes>().0.pop();

            Ok(format!(
                r#"<div class="accordion" id="{}">{}</div>"#,
                self.id, content?
            ))
        })
    }
}

#[derive(Clone, Debug)]
pub(super) struct CollapseBlock {
    session: TagSession,
}

impl CollapseBlock {
    pub(super) fn new(session: TagSession) -> Self {
        Self { session }
    }
}

impl BlockReflection for CollapseBlock {
    fn start_tag(&self) -> &str {
        "collapse"
    }

    fn end_tag(&self) -> &str {
        "endcollapse"
    }

    fn description(&self) -> &str {
        "A collapsible card; the arguments are its title"
    }
}

impl ParseBlock for CollapseBlock {
    fn parse(
        &self,
        arguments: TagTokenIter<'_>,
        mut tokens: TagBlock<'_, '_>,
        options: &Language,
    ) -> Result<Box<dyn Renderable>> {
        let title = arguments
            .map(|token| token.as_str().to_string())
            .collect::<Vec<_>>()
            .join(" ");

        let body = Template::new(tokens.parse_all(options)?);
        tokens.assert_empty();

        Ok(Box::new(Collapse {
            title,
            body,
            session: self.session.clone(),
        }))
    }

    fn reflection(&self) -> &dyn BlockReflection {
        self
    }
}

#[derive(Debug)]
struct Collapse {
    title: String,
    body: Template,
    session: TagSession,
}

impl Collapse {
    /// Take the next card index from the innermost accordion.
    fn claim_index(runtime: &dyn Runtime) -> Result<(String, usize)> {
        let mut scopes = runtime.registers().get_mut::<AccordionScopes>();
        let Some(scope) = scopes.0.last_mut() else {
            return Err(Error::with_msg("`collapse` must be used inside an accordion"));
        };
        let index = scope.next_index;
        scope.next_index += 1;
        Ok((scope.id.clone(), index))
    }
}

impl Renderable for Collapse {
    fn render_to(&self, writer: &mut dyn Write, runtime: &dyn Runtime) -> Result<()> {
        self.session.render_block(writer, runtime, || {
            let (accordion_id, index) = Self::claim_index(runtime)?;
            let collapse_id = format!("{}-collapse-{}", accordion_id, index);
            let heading_id = format!("{}-heading-{}", accordion_id, index);

            let text = self.body.render(runtime)?;
            let content = self.session.markdown(&text)?;

            Ok(format!(
                r##"<div class="card">
  <div class="card-header" id="{heading_id}">
    <h4 class="mb-0">
      <button class="btn btn-link collapsed" data-toggle="collapse" data-target="#{collapse_id}" aria-expanded="false" aria-controls="{collapse_id}">
        <span class="plus-minus-wrapper"><div class="plus-minus"></div></span><span class="collapse-title">{title}</span>
      </button>
    </h4>
  </div>
  <div id="{collapse_id}" class="collapse" aria-labelledby="{heading_id}" data-parent="#{accordion_id}">
    <div class="card-body">{content}</div>
  </div>
</div>"##,
                title = self.title,
            ))
        })
    }
}
