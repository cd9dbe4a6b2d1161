// File: crates/sales-charts/src/kind.rs
// Summary: The six selectable chart kinds and their selector labels.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    ComparisonBar,
    TopFivePie,
    SalesHistogram,
    TopFiveHorizontalBar,
    ComparisonScatter,
    TopFiveRetailBar,
}

impl ChartKind {
    /// Label shown in the selector rows.
    pub fn label(self) -> &'static str {
        match self {
            ChartKind::ComparisonBar => "Bar Chart",
            ChartKind::TopFivePie => "Pie Chart",
            ChartKind::SalesHistogram => "Histogram",
            ChartKind::TopFiveHorizontalBar => "Horizontal Bar",
            ChartKind::ComparisonScatter => "Scatter Plot",
            ChartKind::TopFiveRetailBar => "Stacked Bar",
        }
    }

    /// Top-five family, in selector order.
    pub const TOP_FIVE: [ChartKind; 3] = [
        ChartKind::TopFivePie,
        ChartKind::TopFiveHorizontalBar,
        ChartKind::TopFiveRetailBar,
    ];

    /// Retail-vs-warehouse family, in selector order.
    pub const COMPARISON: [ChartKind; 3] = [
        ChartKind::ComparisonBar,
        ChartKind::ComparisonScatter,
        ChartKind::SalesHistogram,
    ];

    pub const ALL: [ChartKind; 6] = [
        ChartKind::ComparisonBar,
        ChartKind::TopFivePie,
        ChartKind::SalesHistogram,
        ChartKind::TopFiveHorizontalBar,
        ChartKind::ComparisonScatter,
        ChartKind::TopFiveRetailBar,
    ];
}
