//! Reconcile command report rendering.

use protoplan_planner::reconcile::ReconcileReport;

use super::output::{Output, Report};

impl Report for ReconcileReport {
    fn render(&self, out: &mut dyn Output) {
        for path in &self.copied {
            out.added_item(path.as_str());
        }
        for path in &self.filled {
            out.list_item(&format!("{} (empty)", path));
        }
        out.preformatted(&format!(
            "{} copied, {} filled",
            self.copied.len(),
            self.filled.len()
        ));
    }
}
