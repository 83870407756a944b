//! Summary sheet formula fixup.
//!
//! Sheet names that start with a digit must be quoted in formulas
//! (`'03'!J7`). Some tools write them unquoted (`03!J7`), which stops
//! resolving once the workbook is saved again.

use crate::sheet::OverviewLayout;
use crate::sheet::grid::SheetGrid;
use crate::sheet::workbook::Workbook;
use regex::Regex;
use std::sync::LazyLock;
use tracing::{info, warn};

static UNQUOTED_MONTH_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|[^'A-Za-z0-9_])(\d{2})!").expect("valid month reference pattern")
});

/// Quote every bare two-digit sheet reference in `formula`.
pub fn quote_month_refs(formula: &str) -> String {
    UNQUOTED_MONTH_REF
        .replace_all(formula, "${1}'${2}'!")
        .into_owned()
}

/// Rewrite the overview cells; returns how many formulas changed.
pub fn fix_overview_formulas(workbook: &mut Workbook, overview: &OverviewLayout) -> usize {
    let mut sheet = match workbook.sheet(&overview.sheet) {
        Ok(s) => s,
        Err(e) => {
            warn!(sheet = %overview.sheet, error = %e, "overview sheet not fixed");
            return 0;
        }
    };

    let mut changed = 0;
    for row in overview.first_row..=overview.last_row {
        for col in &overview.columns {
            let addr = format!("{col}{row}");
            let old = sheet.formula(&addr);
            if old.is_empty() {
                continue;
            }

            let new = quote_month_refs(&old);
            if new != old {
                sheet.set_formula(&addr, &new);
                info!(cell = %addr, old = %old, new = %new, "rewrote overview formula");
                changed += 1;
            }
        }
    }

    changed
}
