//! Per-region aggregation of filtered, sorted realm names by locale.

use crate::catalog::{Locale, Namespace, Region};
use crate::client::{AccessToken, RealmSource};
use crate::error::RealmError;
use crate::name::{filter_name, RealmName};

/// State threaded through one export run
#[derive(Debug)]
pub struct RunContext {
    token: AccessToken,
    realms_seen: usize,
}

impl RunContext {
    pub fn new(token: AccessToken) -> Self {
        Self {
            token,
            realms_seen: 0,
        }
    }

    pub fn token(&self) -> &AccessToken {
        &self.token
    }

    /// Raw realm entries fetched so far, before filtering
    pub fn realms_seen(&self) -> usize {
        self.realms_seen
    }

    fn record(&mut self, fetched: usize) {
        self.realms_seen += fetched;
    }
}

/// Sorted realm names for one namespace, region and locale
pub type RealmNameList = Vec<RealmName>;

/// Name lists of one region, in [`Locale::ALL`] order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegionRealms {
    lists: Vec<(Locale, RealmNameList)>,
}

impl RegionRealms {
    /// Build from lists given in any order; stored in locale order
    pub fn from_lists(mut lists: Vec<(Locale, RealmNameList)>) -> Self {
        lists.sort_by_key(|(locale, _)| Locale::ALL.iter().position(|l| l == locale));
        Self { lists }
    }

    pub fn get(&self, locale: Locale) -> Option<&[RealmName]> {
        self.lists
            .iter()
            .find(|(l, _)| *l == locale)
            .map(|(_, names)| names.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Locale, &[RealmName])> {
        self.lists.iter().map(|(l, names)| (*l, names.as_slice()))
    }

    /// Total names across every locale
    pub fn total_names(&self) -> usize {
        self.lists.iter().map(|(_, names)| names.len()).sum()
    }
}

/// Filter, normalize and sort one raw realm list
pub fn collect_names<'a>(names: impl IntoIterator<Item = Option<&'a str>>) -> RealmNameList {
    let mut result: RealmNameList = names.into_iter().filter_map(filter_name).collect();
    result.sort();
    result
}

/// Fetch every locale of one region and namespace
///
/// Locales are visited in [`Locale::ALL`] order. The first failed fetch
/// aborts the region.
pub fn build_for_region<S: RealmSource + ?Sized>(
    ctx: &mut RunContext,
    source: &S,
    region: Region,
    namespace: Namespace,
) -> Result<RegionRealms, RealmError> {
    let mut lists = Vec::with_capacity(Locale::ALL.len());

    for locale in Locale::ALL {
        let realms = source.fetch_realms(ctx.token(), region, locale, namespace)?;
        ctx.record(realms.len());
        tracing::info!(
            "{} {} {}: {} realms (total so far: {})",
            namespace,
            region,
            locale,
            realms.len(),
            ctx.realms_seen()
        );

        let names = collect_names(realms.iter().map(|r| r.name.as_deref()));
        lists.push((locale, names));
    }

    Ok(RegionRealms { lists })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::RawRealm;
    use crate::mock::MockRealmSource;

    fn ctx() -> RunContext {
        RunContext::new(AccessToken::new("t"))
    }

    fn inner(names: &[RealmName]) -> Vec<String> {
        names.iter().map(RealmName::inner).collect()
    }

    #[test]
    fn test_filters_normalizes_and_sorts() {
        let source = MockRealmSource::new().with_names(
            Namespace::Retail,
            Region::Us,
            Locale::EnUs,
            &["Stormrage (US)", "TEST REALM", "Area 52"],
        );
        let mut ctx = ctx();
        let realms = build_for_region(&mut ctx, &source, Region::Us, Namespace::Retail).unwrap();

        let en: Vec<_> = realms
            .get(Locale::EnUs)
            .unwrap()
            .iter()
            .map(|n| n.as_str().to_string())
            .collect();
        assert_eq!(en, vec!["\"Area 52\"", "\"Stormrage\""]);
    }

    #[test]
    fn test_one_list_per_locale_in_order() {
        let source = MockRealmSource::new();
        let mut ctx = ctx();
        let realms = build_for_region(&mut ctx, &source, Region::Eu, Namespace::ClassicEra).unwrap();

        let locales: Vec<_> = realms.iter().map(|(l, _)| l).collect();
        assert_eq!(locales, Locale::ALL.to_vec());
        assert_eq!(source.call_count(), Locale::ALL.len());
        assert!(source
            .calls
            .borrow()
            .iter()
            .all(|(ns, r, _)| *ns == Namespace::ClassicEra && *r == Region::Eu));
    }

    #[test]
    fn test_order_independent_of_source_order() {
        let forward = ["Aegwynn", "Blackrock", "Zul'jin", "Area 52"];
        let mut backward = forward;
        backward.reverse();

        let a = MockRealmSource::new().with_names(Namespace::Retail, Region::Us, Locale::FrFr, &forward);
        let b = MockRealmSource::new().with_names(Namespace::Retail, Region::Us, Locale::FrFr, &backward);

        let ra = build_for_region(&mut ctx(), &a, Region::Us, Namespace::Retail).unwrap();
        let rb = build_for_region(&mut ctx(), &b, Region::Us, Namespace::Retail).unwrap();
        assert_eq!(ra, rb);
        assert_eq!(
            inner(ra.get(Locale::FrFr).unwrap()),
            vec!["Aegwynn", "Area 52", "Blackrock", "Zul'jin"]
        );
    }

    #[test]
    fn test_duplicates_are_kept() {
        let source = MockRealmSource::new().with_names(
            Namespace::Retail,
            Region::Kr,
            Locale::KoKr,
            &["Azshara (KR)", "Azshara"],
        );
        let realms = build_for_region(&mut ctx(), &source, Region::Kr, Namespace::Retail).unwrap();
        assert_eq!(inner(realms.get(Locale::KoKr).unwrap()), vec!["Azshara", "Azshara"]);
    }

    #[test]
    fn test_counter_counts_raw_entries() {
        let source = MockRealmSource::new()
            .with_names(Namespace::Retail, Region::Us, Locale::EnUs, &["A", "TEST REALM"])
            .with_realms(
                Namespace::Retail,
                Region::Us,
                Locale::DeDe,
                vec![RawRealm::named("B"), RawRealm { name: None, id: Some(1), slug: None }],
            );
        let mut ctx = ctx();
        let realms = build_for_region(&mut ctx, &source, Region::Us, Namespace::Retail).unwrap();
        assert_eq!(ctx.realms_seen(), 4);
        assert_eq!(realms.total_names(), 2);

        build_for_region(&mut ctx, &source, Region::Us, Namespace::Retail).unwrap();
        assert_eq!(ctx.realms_seen(), 8);
    }

    #[test]
    fn test_fetch_failure_aborts_region() {
        let source = MockRealmSource::new().failing_at(Namespace::Retail, Region::Tw, Locale::FrFr);
        let err = build_for_region(&mut ctx(), &source, Region::Tw, Namespace::Retail).unwrap_err();
        assert_eq!(err.status(), Some(503));
        // en_US, ko_KR, fr_FR and nothing after
        assert_eq!(source.call_count(), 3);
    }

    #[test]
    fn test_from_lists_restores_locale_order() {
        let realms = RegionRealms::from_lists(vec![
            (Locale::ItIt, vec![]),
            (Locale::EnUs, vec![]),
        ]);
        let locales: Vec<_> = realms.iter().map(|(l, _)| l).collect();
        assert_eq!(locales, vec![Locale::EnUs, Locale::ItIt]);
    }
}
