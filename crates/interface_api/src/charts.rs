//! Chart option builders
//!
//! The pie and bar charts are Plotly figures (`data` + `layout`), the donut
//! is an ECharts option. Slices follow [`TypeCounts::ranked`]; bars follow
//! type order.

use core_kernel::Currency;
use serde_json::{json, Value};

use domain_claims::{TypeCounts, TypeSums};

/// Pie of claim counts per type
pub fn pie_figure(counts: &TypeCounts) -> Value {
    let ranked = counts.ranked();
    let labels: Vec<&str> = ranked.iter().map(|(t, _)| t.label()).collect();
    let values: Vec<usize> = ranked.iter().map(|(_, c)| *c).collect();

    json!({
        "data": [{
            "type": "pie",
            "labels": labels,
            "values": values,
        }],
        "layout": {
            "title": { "text": "OPD vs Non-OPD" },
        },
    })
}

/// Claimed and approved amounts side by side for each type
///
/// Hover labels carry the currency symbol.
pub fn bar_figure(sums: &TypeSums, currency: Currency) -> Value {
    let types: Vec<&str> = sums.iter().map(|(t, _)| t.label()).collect();
    let claimed: Vec<f64> = sums.iter().map(|(_, s)| s.claimed(currency).to_f64()).collect();
    let approved: Vec<f64> = sums.iter().map(|(_, s)| s.approved(currency).to_f64()).collect();
    let hover = format!("%{{x}}<br>{}%{{y:,.2f}}<extra>%{{fullData.name}}</extra>", currency.symbol());

    json!({
        "data": [
            { "type": "bar", "name": "Claim_Amount", "x": types, "y": claimed, "hovertemplate": hover },
            { "type": "bar", "name": "Approved_Amount", "x": types, "y": approved, "hovertemplate": hover },
        ],
        "layout": {
            "title": { "text": "Amounts by Type" },
            "barmode": "group",
            "xaxis": { "title": { "text": "Type" } },
            "yaxis": { "title": { "text": "value" } },
            "legend": { "title": { "text": "variable" } },
        },
    })
}

/// Styled donut of claim counts per type
pub fn donut_option(counts: &TypeCounts) -> Value {
    let data: Vec<Value> = counts
        .ranked()
        .into_iter()
        .map(|(t, c)| json!({ "value": c, "name": t.label() }))
        .collect();

    json!({
        "tooltip": { "trigger": "item" },
        "legend": { "top": "5%", "left": "center" },
        "series": [{
            "name": "Claim Type",
            "type": "pie",
            "radius": ["40%", "70%"],
            "avoidLabelOverlap": false,
            "itemStyle": {
                "borderRadius": 10,
                "borderColor": "#fff",
                "borderWidth": 2,
            },
            "label": { "show": false, "position": "center" },
            "emphasis": {
                "label": { "show": true, "fontSize": 16, "fontWeight": "bold" },
            },
            "labelLine": { "show": false },
            "data": data,
        }],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_claims::{ClaimRecord, ClaimSet};
    use rust_decimal_macros::dec;

    fn claims() -> ClaimSet {
        ClaimSet::new(
            vec![],
            vec![
                ClaimRecord::new(None, Some(dec!(60000)), Some(dec!(55000)), Some("OPD".into())),
                ClaimRecord::new(None, Some(dec!(30000)), Some(dec!(0)), Some("Inpatient".into())),
                ClaimRecord::new(None, Some(dec!(100)), Some(dec!(100)), Some("Surgery".into())),
            ],
        )
    }

    #[test]
    fn test_pie_slices_are_ranked() {
        let figure = pie_figure(&TypeCounts::from_claims(&claims()));
        assert_eq!(figure["data"][0]["labels"], json!(["Non-OPD", "OPD"]));
        assert_eq!(figure["data"][0]["values"], json!([2, 1]));
        assert_eq!(figure["layout"]["title"]["text"], "OPD vs Non-OPD");
    }

    #[test]
    fn test_bar_groups_both_amounts() {
        let figure = bar_figure(&TypeSums::from_claims(&claims()), Currency::INR);
        assert_eq!(figure["layout"]["barmode"], "group");
        assert_eq!(figure["data"][0]["name"], "Claim_Amount");
        assert_eq!(figure["data"][0]["x"], json!(["Non-OPD", "OPD"]));
        assert_eq!(figure["data"][0]["y"], json!([30100.0, 60000.0]));
        assert_eq!(figure["data"][1]["y"], json!([100.0, 55000.0]));
        assert_eq!(
            figure["data"][0]["hovertemplate"],
            "%{x}<br>₹%{y:,.2f}<extra>%{fullData.name}</extra>"
        );
    }

    #[test]
    fn test_donut_style() {
        let option = donut_option(&TypeCounts::from_claims(&claims()));
        let series = &option["series"][0];
        assert_eq!(series["radius"], json!(["40%", "70%"]));
        assert_eq!(series["itemStyle"]["borderRadius"], 10);
        assert_eq!(series["data"], json!([
            { "value": 2, "name": "Non-OPD" },
            { "value": 1, "name": "OPD" },
        ]));
    }

    #[test]
    fn test_empty_counts_produce_empty_series() {
        let option = donut_option(&TypeCounts::default());
        assert_eq!(option["series"][0]["data"], json!([]));
        let figure = pie_figure(&TypeCounts::default());
        assert_eq!(figure["data"][0]["values"], json!([]));
    }
}
