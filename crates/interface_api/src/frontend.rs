//! Server-rendered dashboard page
//!
//! The page shell is a string constant; the sidebar and the selected view
//! are rendered per request and spliced in. Charts are drawn in the browser
//! by Plotly and ECharts from option JSON embedded in the page.

use core_kernel::{Currency, Money};
use domain_claims::{ClaimFilter, PaidFilter, PipelineOutput, HIGH_CLAIM_THRESHOLD};
use serde_json::Value;

use crate::charts;
use crate::dto::dashboard::{ClaimsTableResponse, View};
use crate::error::ApiError;

/// Page title shown in the browser tab and the heading
pub const PAGE_TITLE: &str = "Medical Claims Dashboard";

/// Everything that varies between page renders
#[derive(Debug, Clone, Copy)]
pub struct PageContext {
    pub view: View,
    pub filter: ClaimFilter,
    pub refresh_secs: u64,
    pub currency: Currency,
}

/// Renders the full page around an already rendered content block
pub fn render_page(ctx: &PageContext, content: &str) -> String {
    PAGE_TEMPLATE
        .replace("__TITLE__", PAGE_TITLE)
        .replace("__REFRESH__", &ctx.refresh_secs.to_string())
        .replace("__SIDEBAR__", &render_sidebar(ctx))
        .replace("__CONTENT__", content)
}

/// Renders the selected view for a successful cycle
pub fn render_view(ctx: &PageContext, output: &PipelineOutput) -> String {
    match ctx.view {
        View::Dashboard => render_dashboard_view(ctx, output),
        View::EChartsView => render_echarts_view(output),
        View::RawData => render_raw_view(output),
    }
}

/// Error banner shown in place of the view
pub fn render_error(err: &ApiError) -> String {
    format!(
        r#"<div class="error"><strong>{}</strong><p>{}</p></div>"#,
        escape_html(err.kind()),
        escape_html(err.message())
    )
}

fn render_sidebar(ctx: &PageContext) -> String {
    let mut html = String::from(r#"<h2>Navigation</h2><nav class="menu">"#);
    for view in View::ALL {
        let class = if view == ctx.view { "active" } else { "" };
        html.push_str(&format!(
            r#"<a class="{}" href="{}"><i class="bi bi-{}"></i> {}</a>"#,
            class,
            escape_html(&page_href(view, &ctx.filter)),
            view.icon(),
            escape_html(view.label())
        ));
    }
    html.push_str("</nav>");

    html.push_str(r#"<form method="get" action="/">"#);
    html.push_str(&format!(
        r#"<input type="hidden" name="view" value="{}">"#,
        escape_html(ctx.view.label())
    ));
    html.push_str(r#"<label for="paid">Filter by Paid Status</label>"#);
    html.push_str(r#"<select id="paid" name="paid" onchange="this.form.submit()">"#);
    for option in PaidFilter::OPTIONS {
        let selected = if option == ctx.filter.paid { " selected" } else { "" };
        html.push_str(&format!(
            r#"<option value="{0}"{1}>{0}</option>"#,
            option.as_str(),
            selected
        ));
    }
    html.push_str("</select>");

    let threshold = Money::new(HIGH_CLAIM_THRESHOLD, ctx.currency);
    let checked = if ctx.filter.high_claims_only { " checked" } else { "" };
    html.push_str(&format!(
        r#"<label class="check"><input type="checkbox" name="high_claims" value="true"{} onchange="this.form.submit()"> Only High Claims (&gt; {}{})</label>"#,
        checked,
        threshold.currency().symbol(),
        threshold.format_grouped(0)
    ));
    html.push_str("</form>");
    html
}

fn render_dashboard_view(ctx: &PageContext, output: &PipelineOutput) -> String {
    let total = output.type_sums.grand_total();

    let mut html = String::from(r#"<div class="metrics">"#);
    html.push_str(&metric("Claims", &output.claims.len().to_string()));
    html.push_str(&metric("Claimed", &total.claimed(ctx.currency).to_string()));
    html.push_str(&metric("Approved", &total.approved(ctx.currency).to_string()));
    html.push_str("</div>");

    html.push_str(r#"<div class="columns"><section>"#);
    html.push_str("<h3>Claim Type Distribution (Plotly)</h3>");
    html.push_str(&plotly_chart("pie-chart", &charts::pie_figure(&output.type_counts)));
    html.push_str("</section><section>");
    html.push_str("<h3>Claimed vs Approved Amounts (Bar)</h3>");
    html.push_str(&plotly_chart("bar-chart", &charts::bar_figure(&output.type_sums, ctx.currency)));
    html.push_str("</section></div>");

    html.push_str("<table><thead><tr><th>Type</th><th>Claims</th><th>Claimed</th><th>Approved</th></tr></thead><tbody>");
    for aggregate in output.aggregates() {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            aggregate.claim_type,
            aggregate.count,
            Money::new(aggregate.claim_amount, ctx.currency),
            Money::new(aggregate.approved_amount, ctx.currency)
        ));
    }
    html.push_str("</tbody></table>");
    html
}

fn render_echarts_view(output: &PipelineOutput) -> String {
    let option = charts::donut_option(&output.type_counts);
    format!(
        r#"<h3>OPD vs Non-OPD (ECharts Donut)</h3><div id="donut-chart" style="height:400px"></div><script>echarts.init(document.getElementById("donut-chart")).setOption({});</script>"#,
        script_json(&option)
    )
}

fn render_raw_view(output: &PipelineOutput) -> String {
    let table = ClaimsTableResponse::new(output);

    let mut html = format!(
        r#"<h3>Filtered Data Table</h3><p class="muted">{} rows</p><div class="table-wrap"><table><thead><tr>"#,
        table.rows.len()
    );
    for column in &table.columns {
        html.push_str(&format!("<th>{}</th>", escape_html(column)));
    }
    html.push_str("</tr></thead><tbody>");
    for row in &table.rows {
        html.push_str("<tr>");
        for cell in row {
            html.push_str(&format!("<td>{}</td>", escape_html(&cell.display())));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table></div>");
    html
}

fn metric(label: &str, value: &str) -> String {
    format!(
        r#"<div class="metric"><span>{}</span><strong>{}</strong></div>"#,
        escape_html(label),
        escape_html(value)
    )
}

fn plotly_chart(id: &str, figure: &Value) -> String {
    format!(
        r#"<div id="{0}" class="chart"></div><script>(function(f){{Plotly.newPlot("{0}", f.data, f.layout, {{responsive: true}});}})({1});</script>"#,
        id,
        script_json(figure)
    )
}

/// Link to a view that keeps the current filters
pub fn page_href(view: View, filter: &ClaimFilter) -> String {
    format!(
        "/?view={}&paid={}&high_claims={}",
        view.label().replace(' ', "%20"),
        filter.paid.as_str(),
        filter.high_claims_only
    )
}

/// JSON safe to place inside a `<script>` element
fn script_json(value: &Value) -> String {
    value.to_string().replace("</", "<\\/")
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

const PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<meta http-equiv="refresh" content="__REFRESH__">
<title>__TITLE__</title>
<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap-icons@1.11.3/font/bootstrap-icons.min.css">
<script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
<script src="https://cdn.jsdelivr.net/npm/echarts@5.5.1/dist/echarts.min.js"></script>
<style>
:root {
  --bg: #ffffff;
  --sidebar: #f0f2f6;
  --border: #d6d9e0;
  --text: #262730;
  --muted: #6b6f7b;
  --accent: #ff4b4b;
  --font: "Source Sans Pro", -apple-system, "Segoe UI", Helvetica, Arial, sans-serif;
}
* { box-sizing: border-box; }
body { margin: 0; font-family: var(--font); color: var(--text); background: var(--bg); display: flex; min-height: 100vh; }
aside { width: 280px; background: var(--sidebar); padding: 24px 16px; }
aside h2 { font-size: 1rem; margin: 0 0 12px; }
.menu a { display: block; padding: 8px 12px; margin-bottom: 4px; border-radius: 6px; color: var(--text); text-decoration: none; }
.menu a.active { background: var(--accent); color: #fff; }
form { margin-top: 24px; display: flex; flex-direction: column; gap: 8px; }
select { padding: 6px; border: 1px solid var(--border); border-radius: 6px; }
label.check { margin-top: 8px; }
main { flex: 1; padding: 24px 40px; overflow-x: auto; }
.columns { display: grid; grid-template-columns: 1fr 1fr; gap: 24px; }
.chart { min-height: 420px; }
.metrics { display: flex; gap: 24px; margin-bottom: 16px; }
.metric { display: flex; flex-direction: column; }
.metric span { color: var(--muted); font-size: 0.85rem; }
.metric strong { font-size: 1.6rem; }
.muted { color: var(--muted); }
.table-wrap { overflow-x: auto; }
table { border-collapse: collapse; margin-top: 16px; font-size: 0.9rem; }
th, td { border: 1px solid var(--border); padding: 4px 10px; text-align: left; white-space: nowrap; }
th { background: var(--sidebar); }
.error { border: 1px solid var(--accent); background: #fff0f0; padding: 12px 16px; border-radius: 6px; }
</style>
</head>
<body>
<aside>__SIDEBAR__</aside>
<main>
<h1>&#129658; __TITLE__</h1>
__CONTENT__
</main>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use domain_claims::{ClaimRecord, ClaimSet};
    use rust_decimal_macros::dec;

    fn ctx(view: View) -> PageContext {
        PageContext {
            view,
            filter: ClaimFilter::new(PaidFilter::Yes, true),
            refresh_secs: 120,
            currency: Currency::INR,
        }
    }

    fn output() -> PipelineOutput {
        let mut record = ClaimRecord::new(
            Some("YES".into()),
            Some(dec!(120000)),
            Some(dec!(100000)),
            Some("<OPD>".into()),
        );
        record.cells = vec![domain_claims::CellValue::Text("<OPD>".into())];
        domain_claims::process(
            ClaimSet::new(vec!["Pay_Text".into()], vec![record]),
            &ClaimFilter::default(),
        )
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }

    #[test]
    fn test_script_json_cannot_close_the_script() {
        let value = serde_json::json!({ "name": "</script><script>alert(1)" });
        assert!(!script_json(&value).contains("</script>"));
    }

    #[test]
    fn test_page_href_keeps_filters() {
        let filter = ClaimFilter::new(PaidFilter::No, true);
        assert_eq!(
            page_href(View::EChartsView, &filter),
            "/?view=ECharts%20View&paid=NO&high_claims=true"
        );
    }

    #[test]
    fn test_page_shell() {
        let page = render_page(&ctx(View::Dashboard), "<p>content</p>");
        assert!(page.contains(r#"<meta http-equiv="refresh" content="120">"#));
        assert!(page.contains("<title>Medical Claims Dashboard</title>"));
        assert!(page.contains("<p>content</p>"));
        assert!(page.contains(r#"<option value="YES" selected>YES</option>"#));
        assert!(page.contains(" checked "));
        assert!(page.contains("Only High Claims (&gt; ₹50,000)"));
        assert!(page.contains(r#"class="active""#));
    }

    #[test]
    fn test_dashboard_view_shows_totals_in_rupees() {
        let html = render_view(&ctx(View::Dashboard), &output());
        assert!(html.contains("₹1,20,000.00"));
        assert!(html.contains("₹1,00,000.00"));
        assert!(html.contains("Plotly.newPlot(\"pie-chart\""));
        assert!(html.contains("Plotly.newPlot(\"bar-chart\""));
    }

    #[test]
    fn test_echarts_view_embeds_donut() {
        let html = render_view(&ctx(View::EChartsView), &output());
        assert!(html.contains("echarts.init"));
        assert!(html.contains(r#""radius":["40%","70%"]"#));
    }

    #[test]
    fn test_raw_view_escapes_cells_and_appends_type() {
        let html = render_view(&ctx(View::RawData), &output());
        assert!(html.contains("<th>Pay_Text</th><th>Type</th>"));
        assert!(html.contains("<td>&lt;OPD&gt;</td><td>OPD</td>"));
        assert!(!html.contains("<OPD>"));
    }
}
