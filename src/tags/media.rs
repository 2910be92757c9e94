use std::collections::HashMap;
use std::io::Write;

use liquid_core::{
    BlockReflection, Language, ParseBlock, Renderable, Result, Runtime, TagBlock, TagTokenIter,
    Template,
};

use super::TagSession;

#[derive(Clone, Debug)]
pub(super) struct MediaBlock {
    session: TagSession,
}

impl MediaBlock {
    pub(super) fn new(session: TagSession) -> Self {
        Self { session }
    }
}

impl BlockReflection for MediaBlock {
    fn start_tag(&self) -> &str {
        "media"
    }

    fn end_tag(&self) -> &str {
        "endmedia"
    }

    fn description(&self) -> &str {
        "A Bootstrap media object: an image beside a block of markdown"
    }
}

impl ParseBlock for MediaBlock {
    fn parse(
        &self,
        mut arguments: TagTokenIter<'_>,
        mut tokens: TagBlock<'_, '_>,
        options: &Language,
    ) -> Result<Box<dyn Renderable>> {
        let mut options_map = HashMap::new();
        while let Some(token) = arguments.next() {
            let pair = token.as_str().to_string();
            let Some((key, value)) = pair.split_once('=') else {
                return Err(
                    arguments.raise_error(&format!("expected key=value, found '{}'", pair))
                );
            };
            options_map.insert(key.to_string(), value.trim_matches('"').to_string());
        }

        let body = Template::new(tokens.parse_all(options)?);
        tokens.assert_empty();

        Ok(Box::new(Media {
            options: options_map,
            body,
            session: self.session.clone(),
        }))
    }

    fn reflection(&self) -> &dyn BlockReflection {
        self
    }
}

/// A parsed media block.
///
/// Options are `key=value` pairs: `img`, `alt`, `header` and `side`
/// (`right` places the image after the body).
#[derive(Debug)]
struct Media {
    options: HashMap<String, String>,
    body: Template,
    session: TagSession,
}

impl Media {
    fn option(&self, key: &str) -> &str {
        self.options.get(key).map(String::as_str).unwrap_or_default()
    }

    fn html(&self, content: &str) -> String {
        let image = format!(
            r#"<img class="mr-3" src="{}" alt="{}">"#,
            self.option("img"),
            self.option("alt")
        );
        let mut media_body = String::from("<div class=\"media-body\">\n");
        if let Some(header) = self.options.get("header") {
            media_body.push_str(&format!("<h5 class=\"mt-0\">{}</h5>\n", header));
        }
        media_body.push_str(content.trim());
        media_body.push_str("\n</div>");

        let inner = if self.option("side") == "right" {
            format!("{}\n{}", media_body, image)
        } else {
            format!("{}\n{}", image, media_body)
        };
        format!("<div class=\"media\">\n{}\n</div>", inner)
    }
}

impl Renderable for Media {
    fn render_to(&self, writer: &mut dyn Write, runtime: &dyn Runtime) -> Result<()> {
        self.session.render_block(writer, runtime, || {
            let text = self.body.render(runtime)?;
            let content = self.session.markdown(&text)?;
            Ok(self.html(&content))
        })
    }
}
