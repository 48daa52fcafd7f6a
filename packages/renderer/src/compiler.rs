use clipper_blocks::{
    BlockKind, BookingProps, HeroProps, ServiceListProps, ServicesGridProps, TeamProps,
};
use clipper_document::{Block, PageDocument};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

/// Errors that can occur while rendering a single block
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("unknown block kind: {0}")]
    UnknownKind(String),

    #[error("invalid props for {kind} block: {source}")]
    InvalidProps {
        kind: BlockKind,
        #[source]
        source: serde_json::Error,
    },
}

/// Options for HTML rendering
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
        }
    }
}

struct Context {
    options: RenderOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    fn new(options: RenderOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        let indent = self.options.indent.clone();
        for _ in 0..self.depth {
            self.add(&indent);
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Render a full page document to an HTML document.
///
/// Total: per-block failures are logged and skipped, so one corrupt or
/// legacy block never takes the whole page down.
pub fn render_page(document: &PageDocument, options: RenderOptions) -> String {
    let mut ctx = Context::new(options);

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html lang=\"pt-BR\">");
    ctx.indent();

    render_head(document, &mut ctx);

    ctx.add_line("<body>");
    ctx.indent();

    for block in &document.content {
        match render_block_into(block, &mut ctx) {
            Ok(()) => {}
            Err(error) => {
                warn!(kind = %block.kind, %error, "skipping unrenderable block");
            }
        }
    }

    ctx.dedent();
    ctx.add_line("</body>");

    ctx.dedent();
    ctx.add_line("</html>");

    ctx.get_output()
}

/// Render one block to an HTML fragment.
pub fn render_block(block: &Block) -> Result<String, RenderError> {
    let mut ctx = Context::new(RenderOptions::default());
    render_block_into(block, &mut ctx)?;
    Ok(ctx.get_output())
}

fn render_head(document: &PageDocument, ctx: &mut Context) {
    // `root.props` is reserved for page-level settings; `title` is the only
    // key honored today.
    let title = document
        .root
        .props
        .get("title")
        .and_then(Value::as_str)
        .unwrap_or("Barbearia");

    ctx.add_line("<head>");
    ctx.indent();
    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    ctx.add_line(&format!("<title>{}</title>", escape_html(title)));
    ctx.dedent();
    ctx.add_line("</head>");
}

fn render_block_into(block: &Block, ctx: &mut Context) -> Result<(), RenderError> {
    let kind = block
        .block_kind()
        .ok_or_else(|| RenderError::UnknownKind(block.kind.clone()))?;

    let props = Value::Object(block.props.clone());
    match kind {
        BlockKind::Hero => render_hero(parse_props(kind, props)?, ctx),
        BlockKind::ServicesGrid => render_services_grid(parse_props(kind, props)?, ctx),
        BlockKind::ServiceList => render_service_list(parse_props(kind, props)?, ctx),
        BlockKind::Team => render_team(parse_props(kind, props)?, ctx),
        BlockKind::Booking => render_booking(parse_props(kind, props)?, ctx),
    }
    Ok(())
}

fn parse_props<T: serde::de::DeserializeOwned>(
    kind: BlockKind,
    props: Value,
) -> Result<T, RenderError> {
    serde_json::from_value(props).map_err(|source| RenderError::InvalidProps { kind, source })
}

fn render_hero(props: HeroProps, ctx: &mut Context) {
    ctx.add_line(&format!(
        "<section class=\"block block-hero\" style=\"{}\">",
        style_colors(&props.background_color, &props.text_color)
    ));
    ctx.indent();

    match &props.image {
        Some(url) if !url.is_empty() => {
            ctx.add_line(&format!(
                "<img class=\"hero-image\" src=\"{}\" alt=\"\" />",
                escape_html(url)
            ));
        }
        _ => {
            ctx.add_line("<div class=\"hero-image hero-image-placeholder\"></div>");
        }
    }

    ctx.add_line(&format!("<h1>{}</h1>", escape_html(&props.title)));
    ctx.add_line(&format!("<p>{}</p>", escape_html(&props.subtitle)));
    ctx.add_line(&format!(
        "<a class=\"cta\" href=\"{}\">{}</a>",
        escape_html(&props.cta_link),
        escape_html(&props.cta_label)
    ));

    ctx.dedent();
    ctx.add_line("</section>");
}

fn render_services_grid(props: ServicesGridProps, ctx: &mut Context) {
    ctx.add_line(&format!(
        "<section class=\"block block-services-grid\" style=\"background-color: {};\">",
        escape_html(&props.background_color)
    ));
    ctx.indent();

    ctx.add_line(&format!("<h2>{}</h2>", escape_html(&props.title)));
    if !props.subtitle.is_empty() {
        ctx.add_line(&format!("<p>{}</p>", escape_html(&props.subtitle)));
    }

    ctx.add_line(&format!(
        "<ul class=\"services\" data-columns=\"{}\">",
        escape_html(&props.columns)
    ));
    ctx.indent();
    for service in &props.services {
        ctx.add_line("<li class=\"service-card\">");
        ctx.indent();
        ctx.add_line(&format!("<h3>{}</h3>", escape_html(service.grid_label())));
        if let Some(price) = &service.price {
            ctx.add_line(&format!(
                "<span class=\"price\" style=\"color: {};\">{}</span>",
                escape_html(&props.accent_color),
                escape_html(price)
            ));
        }
        if let Some(duration) = &service.duration {
            ctx.add_line(&format!(
                "<span class=\"duration\">{}</span>",
                escape_html(duration)
            ));
        }
        if let Some(description) = &service.description {
            ctx.add_line(&format!(
                "<p class=\"description\">{}</p>",
                escape_html(description)
            ));
        }
        ctx.dedent();
        ctx.add_line("</li>");
    }
    ctx.dedent();
    ctx.add_line("</ul>");

    ctx.dedent();
    ctx.add_line("</section>");
}

fn render_service_list(props: ServiceListProps, ctx: &mut Context) {
    ctx.add_line(&format!(
        "<section class=\"block block-service-list\" style=\"background-color: {};\">",
        escape_html(&props.background_color)
    ));
    ctx.indent();

    ctx.add_line(&format!("<h2>{}</h2>", escape_html(&props.heading)));

    ctx.add_line("<table class=\"price-table\">");
    ctx.indent();
    for item in &props.items {
        ctx.add_line("<tr>");
        ctx.indent();
        ctx.add_line(&format!("<td>{}</td>", escape_html(item.list_label())));
        ctx.add_line(&format!(
            "<td>{}</td>",
            escape_html(item.duration.as_deref().unwrap_or("—"))
        ));
        ctx.add_line(&format!(
            "<td>{}</td>",
            escape_html(item.price.as_deref().unwrap_or("—"))
        ));
        ctx.dedent();
        ctx.add_line("</tr>");
    }
    ctx.dedent();
    ctx.add_line("</table>");

    ctx.dedent();
    ctx.add_line("</section>");
}

fn render_team(props: TeamProps, ctx: &mut Context) {
    ctx.add_line(&format!(
        "<section class=\"block block-team\" style=\"background-color: {};\">",
        escape_html(&props.background_color)
    ));
    ctx.indent();

    ctx.add_line(&format!("<h2>{}</h2>", escape_html(&props.title)));
    if !props.subtitle.is_empty() {
        ctx.add_line(&format!("<p>{}</p>", escape_html(&props.subtitle)));
    }

    ctx.add_line("<ul class=\"team\">");
    ctx.indent();
    for member in &props.members {
        ctx.add_line("<li class=\"team-member\">");
        ctx.indent();
        match &member.photo {
            Some(url) if !url.is_empty() => {
                ctx.add_line(&format!(
                    "<img class=\"portrait\" src=\"{}\" alt=\"{}\" />",
                    escape_html(url),
                    escape_html(&member.name)
                ));
            }
            _ => {
                ctx.add_line("<div class=\"portrait portrait-placeholder\"></div>");
            }
        }
        ctx.add_line(&format!("<h3>{}</h3>", escape_html(&member.name)));
        ctx.add_line(&format!(
            "<p class=\"role\">{}</p>",
            escape_html(&member.role)
        ));
        if let Some(handle) = &member.instagram {
            ctx.add_line(&format!(
                "<a class=\"instagram\" href=\"https://instagram.com/{}\">@{}</a>",
                escape_html(handle),
                escape_html(handle)
            ));
        }
        ctx.dedent();
        ctx.add_line("</li>");
    }
    ctx.dedent();
    ctx.add_line("</ul>");

    ctx.dedent();
    ctx.add_line("</section>");
}

fn render_booking(props: BookingProps, ctx: &mut Context) {
    ctx.add_line(&format!(
        "<section class=\"block block-booking\" style=\"{}\">",
        style_colors(&props.background_color, &props.accent_color)
    ));
    ctx.indent();

    ctx.add_line(&format!("<h2>{}</h2>", escape_html(&props.title)));
    ctx.add_line(&format!("<p>{}</p>", escape_html(&props.subtitle)));
    ctx.add_line(&format!(
        "<a class=\"button\" href=\"{}\">{}</a>",
        escape_html(&props.button_link),
        escape_html(&props.button_label)
    ));

    ctx.dedent();
    ctx.add_line("</section>");
}

fn style_colors(background: &str, foreground: &str) -> String {
    format!(
        "background-color: {}; color: {};",
        escape_html(background),
        escape_html(foreground)
    )
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
