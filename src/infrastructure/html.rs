// HTML rendering of the page layout
use crate::domain::card::Card;
use crate::domain::figure::Figure;
use crate::domain::layout::{Column, ColumnWidth, Node, Page, Row};
use crate::error::Result;
use std::fmt::Write;

const BOOTSTRAP_CYBORG_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootswatch@5.3.3/dist/cyborg/bootstrap.min.css";
const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

const CARD_STYLE: &str = "background-color: #2a2a2a; color: white; border-radius: 10px; margin: 10px;";
const CARD_HEADER_STYLE: &str = "background-color: #333333;";

// Draws every graph from the JSON block that follows its container.
const PLOT_SCRIPT: &str = r#"document.querySelectorAll("[data-figure]").forEach(function (el) {
  var fig = JSON.parse(document.getElementById(el.dataset.figure + "-figure").textContent);
  Plotly.newPlot(el, fig.data, fig.layout, {responsive: true});
});"#;

/// Renders a complete HTML document for the page.
pub fn render_page(page: &Page) -> Result<String> {
    let mut body = String::new();
    for row in &page.rows {
        render_row(&mut body, row)?;
    }

    Ok(format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
<title>{title}</title>\n\
<link rel=\"stylesheet\" href=\"{css}\">\n\
<script src=\"{plotly}\"></script>\n\
</head>\n<body>\n<div class=\"container-fluid\">\n{body}</div>\n\
<script>\n{script}\n</script>\n</body>\n</html>\n",
        title = escape(&page.title),
        css = BOOTSTRAP_CYBORG_CSS,
        plotly = PLOTLY_JS,
        body = body,
        script = PLOT_SCRIPT,
    ))
}

fn render_row(out: &mut String, row: &Row) -> Result<()> {
    match row.margin_bottom_px {
        Some(px) => out.push_str(&format!("<div class=\"row\" style=\"margin-bottom: {}px;\">\n", px)),
        None => out.push_str("<div class=\"row\">\n"),
    }
    for column in &row.columns {
        render_column(out, column)?;
    }
    out.push_str("</div>\n");
    Ok(())
}

fn column_class(width: ColumnWidth) -> String {
    match width {
        ColumnWidth::Full => "col-12".to_string(),
        ColumnWidth::Medium(n) => format!("col-md-{}", n),
    }
}

fn render_column(out: &mut String, column: &Column) -> Result<()> {
    let _ = writeln!(out, "<div class=\"{}\">", column_class(column.width));
    match &column.node {
        Node::Heading(text) => {
            let _ = writeln!(
                out,
                "<h1 style=\"text-align: center; margin-top: 20px;\">{}</h1>",
                escape(text)
            );
        }
        Node::Card(card) => render_card(out, card),
        Node::Graph { figure, height_px } => render_graph(out, figure, *height_px)?,
        Node::Footer(text) => {
            let _ = writeln!(
                out,
                "<div style=\"text-align: center; margin-bottom: 20px;\">{}</div>",
                escape(text)
            );
        }
    }
    out.push_str("</div>\n");
    Ok(())
}

fn render_card(out: &mut String, card: &Card) {
    let progress = &card.progress;
    let mut bar_class = format!("progress-bar bg-{}", progress.color.as_str());
    if progress.striped {
        bar_class.push_str(" progress-bar-striped");
    }
    if progress.animated {
        bar_class.push_str(" progress-bar-animated");
    }

    let _ = writeln!(out, "<div class=\"card\" style=\"{}\">", CARD_STYLE);
    let _ = writeln!(
        out,
        "<div class=\"card-header\" style=\"{}\">{}</div>",
        CARD_HEADER_STYLE,
        escape(&card.header)
    );
    out.push_str("<div class=\"card-body\">\n");
    let _ = writeln!(out, "<h4 class=\"card-title\">{}</h4>", escape(&card.headline));
    let _ = writeln!(out, "<p>{}</p>", escape(&card.description));
    let _ = writeln!(
        out,
        "<div class=\"progress mb-2\"><div class=\"{}\" role=\"progressbar\" style=\"width: {v}%;\" \
aria-valuenow=\"{v}\" aria-valuemin=\"0\" aria-valuemax=\"100\"></div></div>",
        bar_class,
        v = progress.value
    );
    let _ = writeln!(out, "<small>{}</small>", escape(&card.footnote));
    out.push_str("</div>\n</div>\n");
}

fn render_graph(out: &mut String, figure: &Figure, height_px: u32) -> Result<()> {
    let id = escape(&figure.id);
    let json = script_safe(&figure.to_json()?);
    let _ = writeln!(
        out,
        "<div id=\"{id}\" data-figure=\"{id}\" style=\"height: {}px;\"></div>",
        height_px
    );
    let _ = writeln!(
        out,
        "<script type=\"application/json\" id=\"{id}-figure\">{}</script>",
        json
    );
    Ok(())
}

/// Escapes text for use in element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

// JSON inside <script> must not contain a closing tag sequence.
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}
