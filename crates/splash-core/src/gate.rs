//! One-shot readiness gate over the splash layout sections
//!
//! The hide animation may run only once the container layout, the logo, and
//! the brand section have all reported ready. Sections the configuration
//! skips are pre-seeded ready at construction. The gate latches after
//! firing: later reports are accepted but never fire again.
//!
//! In the current control flow every section reports ready synchronously
//! within one orchestration call, so the gate fires on the final report of
//! that call. It is kept as a real state machine so per-section readiness
//! can become genuinely asynchronous (e.g. real image decode) without
//! changing the firing contract.

use parking_lot::Mutex;

/// A section of the splash layout that must be ready before the hide
/// animation may run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// The full-bleed container overlay
    Layout,
    /// The logo image
    Logo,
    /// The brand image
    Brand,
}

#[derive(Debug)]
struct GateState {
    layout: bool,
    logo: bool,
    brand: bool,
    fired: bool,
}

impl GateState {
    fn all_ready(&self) -> bool {
        self.layout && self.logo && self.brand
    }
}

/// One-shot gate that fires when all three sections are ready
#[derive(Debug)]
pub struct ReadinessGate {
    state: Mutex<GateState>,
}

impl ReadinessGate {
    /// Create a gate with skipped sections pre-seeded ready
    ///
    /// The layout section is never skipped; a skipped logo or brand section
    /// counts as ready from the start.
    pub fn new(skip_logo: bool, skip_brand: bool) -> Self {
        Self {
            state: Mutex::new(GateState {
                layout: false,
                logo: skip_logo,
                brand: skip_brand,
                fired: false,
            }),
        }
    }

    /// Mark a section ready
    ///
    /// Returns `true` exactly once: on the report that completes the set.
    /// Reporting an already-ready section, or reporting after the gate has
    /// fired, returns `false`.
    pub fn report(&self, section: Section) -> bool {
        let mut state = self.state.lock();
        match section {
            Section::Layout => state.layout = true,
            Section::Logo => state.logo = true,
            Section::Brand => state.brand = true,
        }
        if state.all_ready() && !state.fired {
            state.fired = true;
            true
        } else {
            false
        }
    }

    /// Whether the gate has already fired
    pub fn has_fired(&self) -> bool {
        self.state.lock().fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_on_final_report() {
        let gate = ReadinessGate::new(false, false);
        assert!(!gate.report(Section::Layout));
        assert!(!gate.report(Section::Logo));
        assert!(gate.report(Section::Brand));
        assert!(gate.has_fired());
    }

    #[test]
    fn test_fires_regardless_of_report_order() {
        let gate = ReadinessGate::new(false, false);
        assert!(!gate.report(Section::Brand));
        assert!(!gate.report(Section::Layout));
        assert!(gate.report(Section::Logo));
    }

    #[test]
    fn test_skipped_sections_are_preseeded() {
        let gate = ReadinessGate::new(true, true);
        assert!(!gate.has_fired());
        // Only the layout section is outstanding
        assert!(gate.report(Section::Layout));
    }

    #[test]
    fn test_does_not_fire_while_a_section_is_unready() {
        let gate = ReadinessGate::new(true, false);
        assert!(!gate.report(Section::Layout));
        assert!(!gate.has_fired());
        assert!(gate.report(Section::Brand));
    }

    #[test]
    fn test_fires_at_most_once() {
        let gate = ReadinessGate::new(false, false);
        gate.report(Section::Layout);
        gate.report(Section::Logo);
        assert!(gate.report(Section::Brand));

        // Re-reporting after the latch never fires again
        assert!(!gate.report(Section::Brand));
        assert!(!gate.report(Section::Layout));
        assert!(gate.has_fired());
    }

    #[test]
    fn test_duplicate_reports_before_completion() {
        let gate = ReadinessGate::new(false, false);
        assert!(!gate.report(Section::Layout));
        assert!(!gate.report(Section::Layout));
        assert!(!gate.report(Section::Logo));
        assert!(gate.report(Section::Brand));
    }
}
