//! The `colorize` filter family.
//!
//! ```text
//! {{ "Stop" | colorize: "red" }}
//! {{ "Go" | colorize_green }}
//! ```

use liquid::ParserBuilder;
use liquid_core::{
    Display_filter, Expression, Filter, FilterParameters, FilterReflection, FromFilterParameters,
    ParseFilter, Result, Runtime, Value, ValueView,
};

/// Register the colorize filters on a parser builder.
pub(super) fn register_filters(parser_builder: ParserBuilder) -> ParserBuilder {
    parser_builder
        .filter(Colorize)
        .filter(ColorizeRed)
        .filter(ColorizeBlue)
        .filter(ColorizeGreen)
}

/// Wraps the input in `<span class="text-COLOR">`.
fn span(color: &str, input: &dyn ValueView) -> Value {
    Value::scalar(format!(
        r#"<span class="text-{}">{}</span>"#,
        color,
        input.to_kstr()
    ))
}

#[derive(Debug, FilterParameters)]
struct ColorizeArgs {
    #[parameter(description = "Color name, used as the `text-` class suffix.", arg_type = "str")]
    color: Expression,
}

#[derive(Clone, ParseFilter, FilterReflection)]
#[filter(
    name = "colorize",
    description = "Wraps the input in a span with a `text-COLOR` class.",
    parameters(ColorizeArgs),
    parsed(ColorizeFilter)
)]
pub(super) struct Colorize;

#[derive(Debug, FromFilterParameters, Display_filter)]
#[name = "colorize"]
struct ColorizeFilter {
    #[parameters]
    args: ColorizeArgs,
}

impl Filter for ColorizeFilter {
    fn evaluate(&self, input: &dyn ValueView, runtime: &dyn Runtime) -> Result<Value> {
        let args = self.args.evaluate(runtime)?;
        Ok(span(&args.color.to_string(), input))
    }
}

#[derive(Clone, ParseFilter, FilterReflection)]
#[filter(
    name = "colorize_red",
    description = "Wraps the input in a `text-red` span.",
    parsed(ColorizeRedFilter)
)]
pub(super) struct ColorizeRed;

#[derive(Debug, Default, Display_filter)]
#[name = "colorize_red"]
struct ColorizeRedFilter;

impl Filter for ColorizeRedFilter {
    fn evaluate(&self, input: &dyn ValueView, _runtime: &dyn Runtime) -> Result<Value> {
        Ok(span("red", input))
    }
}

#[derive(Clone, ParseFilter, FilterReflection)]
#[filter(
    name = "colorize_blue",
    description = "Wraps the input in a `text-blue` span.",
    parsed(ColorizeBlueFilter)
)]
pub(super) struct ColorizeBlue;

#[derive(Debug, Default, Display_filter)]
#[name = "colorize_blue"]
struct ColorizeBlueFilter;

impl Filter for ColorizeBlueFilter {
    fn evaluate(&self, input: &dyn ValueView, _runtime: &dyn Runtime) -> Result<Value> {
        Ok(span("blue", input))
    }
}

#[derive(Clone, ParseFilter, FilterReflection)]
#[filter(
    name = "colorize_green",
    description = "Wraps the input in a `text-green` span.",
    parsed(ColorizeGreenFilter)
)]
pub(super) struct ColorizeGreen;

#[derive(Debug, Default, Display_filter)]
#[name = "colorize_green"]
struct ColorizeGreenFilter;

impl Filter for ColorizeGreenFilter {
    fn evaluate(&self, input: &dyn ValueView, _runtime: &dyn Runtime) -> Result<Value> {
        Ok(span("green", input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(template: &str) -> Result<String> {
        let parser = register_filters(ParserBuilder::with_stdlib()).build()?;
        let globals = liquid::object!({ "word": "ok", "accent": "blue" });
        parser.parse(template)?.render(&globals)
    }

    #[test]
    fn test_colorize_with_argument() {
        let html = render(r#"{{ "Stop" | colorize: "yellow" }}"#).unwrap();
        assert_eq!(html, r#"<span class="text-yellow">Stop</span>"#);
    }

    #[test]
    fn test_colorize_argument_can_be_a_variable() {
        let html = render(r#"{{ word | colorize: accent }}"#).unwrap();
        assert_eq!(html, r#"<span class="text-blue">ok</span>"#);
    }

    #[test]
    fn test_fixed_colors() {
        assert_eq!(
            render(r#"{{ "a" | colorize_red }}"#).unwrap(),
            r#"<span class="text-red">a</span>"#
        );
        assert_eq!(
            render(r#"{{ "b" | colorize_blue }}"#).unwrap(),
            r#"<span class="text-blue">b</span>"#
        );
        assert_eq!(
            render(r#"{{ "c" | colorize_green }}"#).unwrap(),
            r#"<span class="text-green">c</span>"#
        );
    }

    #[test]
    fn test_missing_color_is_an_error() {
        assert!(render(r#"{{ "x" | colorize }}"#).is_err());
    }
}
