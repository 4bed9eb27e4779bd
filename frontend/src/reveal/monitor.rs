use super::detector::{Threshold, Visibility, VisibilityDetector};
use super::store::SectionId;

struct Watch<R> {
    section: SectionId,
    region: R,
    threshold: Threshold,
}

/// Tracks which page sections are still waiting to be revealed and turns raw
/// visibility reports into one-shot reveal events.
///
/// A section is reported at most once: the first report at or above its
/// threshold removes the watch and unobserves the region. After
/// [`RevealMonitor::dispose_all`] every report and registration is ignored.
pub struct RevealMonitor<D: VisibilityDetector> {
    detector: D,
    watches: Vec<Watch<D::Region>>,
    disposed: bool,
}

impl<D: VisibilityDetector> RevealMonitor<D> {
    pub fn new(detector: D) -> Self {
        Self {
            detector,
            watches: Vec::new(),
            disposed: false,
        }
    }

    /// Starts watching `region` for `section`. A missing region (never
    /// rendered) is not an error; there is simply nothing to observe.
    /// Registering a section again replaces its previous watch.
    pub fn register(&mut self, section: SectionId, region: Option<D::Region>, threshold: Threshold) {
        if self.disposed {
            log::debug!("ignoring registration of section {} after dispose", section.0);
            return;
        }
        let Some(region) = region else {
            log::debug!("section {} has no region to observe", section.0);
            return;
        };
        self.unregister(section);
        self.detector.observe(&region, threshold);
        self.watches.push(Watch {
            section,
            region,
            threshold,
        });
    }

    /// Feeds one report. Returns the section that just became visible, if any.
    pub fn report(&mut self, region: &D::Region, visibility: Visibility) -> Option<SectionId> {
        if self.disposed {
            return None;
        }
        let position = self.watches.iter().position(|watch| &watch.region == region)?;
        if !visibility.reaches(self.watches[position].threshold) {
            return None;
        }
        let watch = self.watches.swap_remove(position);
        self.detector.unobserve(&watch.region);
        log::debug!(
            "section {} revealed at {:.2} visible",
            watch.section.0,
            visibility.ratio
        );
        Some(watch.section)
    }

    pub fn unregister(&mut self, section: SectionId) {
        if let Some(position) = self.watches.iter().position(|watch| watch.section == section) {
            let watch = self.watches.swap_remove(position);
            self.detector.unobserve(&watch.region);
        }
    }

    pub fn dispose_all(&mut self) {
        if self.disposed {
            return;
        }
        for watch in self.watches.drain(..) {
            self.detector.unobserve(&watch.region);
        }
        self.detector.disconnect();
        self.disposed = true;
    }
}

#[cfg(test)]
impl<D: VisibilityDetector> RevealMonitor<D> {
    pub fn is_watching(&self, section: SectionId) -> bool {
        self.watches.iter().any(|watch| watch.section == section)
    }

    pub fn pending(&self) -> usize {
        self.watches.len()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn detector(&self) -> &D {
        &self.detector
    }
}

impl<D: VisibilityDetector> Drop for RevealMonitor<D> {
    fn drop(&mut self) {
        self.dispose_all();
    }
}

/// Recording detector for tests: keeps every call so assertions can check
/// what the monitor asked the browser to do.
#[cfg(test)]
pub(crate) mod scripted {
    use super::super::detector::{Threshold, VisibilityDetector};

    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        Observe(&'static str, f64),
        Unobserve(&'static str),
        Disconnect,
    }

    #[derive(Default)]
    pub struct ScriptedDetector {
        pub calls: Vec<Call>,
    }

    impl ScriptedDetector {
        pub fn observing(&self) -> Vec<&'static str> {
            let mut live = Vec::new();
            for call in &self.calls {
                match call {
                    Call::Observe(region, _) => live.push(*region),
                    Call::Unobserve(region) => live.retain(|r| r != region),
                    Call::Disconnect => live.clear(),
                }
            }
            live
        }
    }

    impl VisibilityDetector for ScriptedDetector {
        type Region = &'static str;

        fn observe(&mut self, region: &&'static str, threshold: Threshold) {
            self.calls.push(Call::Observe(*region, threshold.get()));
        }

        fn unobserve(&mut self, region: &&'static str) {
            self.calls.push(Call::Unobserve(*region));
        }

        fn disconnect(&mut self) {
            self.calls.push(Call::Disconnect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::scripted::{Call, ScriptedDetector};
    use super::*;

    fn threshold(fraction: f64) -> Threshold {
        Threshold::new(fraction).unwrap()
    }

    fn monitor() -> RevealMonitor<ScriptedDetector> {
        RevealMonitor::new(ScriptedDetector::default())
    }

    #[test]
    fn nothing_fires_below_threshold() {
        let mut monitor = monitor();
        monitor.register(SectionId(0), Some("heading"), threshold(0.2));

        assert_eq!(monitor.report(&"heading", Visibility::hidden()), None);
        assert_eq!(monitor.report(&"heading", Visibility::at(0.05)), None);
        assert_eq!(monitor.report(&"heading", Visibility::at(0.19)), None);
        assert!(monitor.is_watching(SectionId(0)));

        assert_eq!(
            monitor.report(&"heading", Visibility::at(0.2)),
            Some(SectionId(0))
        );
    }

    #[test]
    fn page_specific_threshold_is_respected() {
        let mut monitor = monitor();
        monitor.register(SectionId(0), Some("trusted-by"), threshold(0.3));

        assert_eq!(monitor.report(&"trusted-by", Visibility::at(0.25)), None);
        assert_eq!(
            monitor.report(&"trusted-by", Visibility::at(0.31)),
            Some(SectionId(0))
        );
    }

    #[test]
    fn fires_once_then_unobserves() {
        let mut monitor = monitor();
        monitor.register(SectionId(1), Some("cards"), threshold(0.2));

        assert_eq!(
            monitor.report(&"cards", Visibility::at(0.5)),
            Some(SectionId(1))
        );
        assert_eq!(monitor.report(&"cards", Visibility::at(0.9)), None);
        assert_eq!(monitor.report(&"cards", Visibility::at(1.0)), None);

        assert!(!monitor.is_watching(SectionId(1)));
        assert!(monitor
            .detector()
            .calls
            .contains(&Call::Unobserve("cards")));
        assert!(monitor.detector().observing().is_empty());
    }

    #[test]
    fn missing_region_never_reaches_detector() {
        let mut monitor = monitor();
        monitor.register(SectionId(0), None, threshold(0.2));

        assert_eq!(monitor.pending(), 0);
        assert!(monitor.detector().calls.is_empty());
    }

    #[test]
    fn reregistering_replaces_the_watch() {
        let mut monitor = monitor();
        monitor.register(SectionId(0), Some("old"), threshold(0.2));
        monitor.register(SectionId(0), Some("new"), threshold(0.5));

        assert_eq!(monitor.pending(), 1);
        assert_eq!(monitor.detector().observing(), vec!["new"]);
        assert_eq!(monitor.report(&"old", Visibility::at(1.0)), None);
        assert_eq!(monitor.report(&"new", Visibility::at(0.4)), None);
        assert_eq!(
            monitor.report(&"new", Visibility::at(0.5)),
            Some(SectionId(0))
        );
    }

    #[test]
    fn unregister_suppresses_and_is_repeatable() {
        let mut monitor = monitor();
        monitor.register(SectionId(0), Some("form"), threshold(0.2));
        monitor.unregister(SectionId(0));
        monitor.unregister(SectionId(0));
        monitor.unregister(SectionId(7));

        assert_eq!(monitor.report(&"form", Visibility::at(1.0)), None);
        assert_eq!(
            monitor.detector().calls,
            vec![Call::Observe("form", 0.2), Call::Unobserve("form")]
        );
    }

    #[test]
    fn sections_fire_independently_in_any_order() {
        let mut monitor = monitor();
        let cards = ["tip-0", "tip-1", "tip-2"];
        for (index, region) in cards.iter().enumerate() {
            monitor.register(SectionId(index), Some(*region), threshold(0.2));
        }

        assert_eq!(
            monitor.report(&"tip-2", Visibility::at(0.3)),
            Some(SectionId(2))
        );
        assert_eq!(monitor.report(&"tip-0", Visibility::at(0.1)), None);
        assert_eq!(
            monitor.report(&"tip-1", Visibility::at(0.8)),
            Some(SectionId(1))
        );
        assert_eq!(
            monitor.report(&"tip-0", Visibility::at(0.21)),
            Some(SectionId(0))
        );
        assert_eq!(monitor.pending(), 0);
    }

    #[test]
    fn dispose_blocks_queued_reports() {
        let mut monitor = monitor();
        monitor.register(SectionId(0), Some("info"), threshold(0.2));
        monitor.register(SectionId(1), Some("links"), threshold(0.2));

        monitor.dispose_all();

        assert!(monitor.is_disposed());
        assert_eq!(monitor.report(&"info", Visibility::at(1.0)), None);
        assert_eq!(monitor.report(&"links", Visibility::at(1.0)), None);
        assert_eq!(monitor.detector().calls.last(), Some(&Call::Disconnect));
        assert!(monitor.detector().observing().is_empty());

        monitor.register(SectionId(2), Some("late"), threshold(0.2));
        assert_eq!(monitor.pending(), 0);

        let calls = monitor.detector().calls.len();
        monitor.dispose_all();
        assert_eq!(monitor.detector().calls.len(), calls);
    }

    #[test]
    fn unknown_region_is_ignored() {
        let mut monitor = monitor();
        monitor.register(SectionId(0), Some("heading"), threshold(0.2));
        assert_eq!(monitor.report(&"elsewhere", Visibility::at(1.0)), None);
        assert!(monitor.is_watching(SectionId(0)));
    }
}
