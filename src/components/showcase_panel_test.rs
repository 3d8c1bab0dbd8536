use super::*;

#[test]
fn stats_list_live_jobs_companies_and_news() {
    let labels: Vec<_> = STATS.iter().map(|s| (s.number, s.label)).collect();
    assert_eq!(
        labels,
        vec![("175,324", "Live Job"), ("97,354", "Companies"), ("7,532", "News Jobs")]
    );
}

#[test]
fn only_first_stat_uses_briefcase_icon() {
    let icons: Vec<_> = STATS.iter().map(|s| s.icon).collect();
    assert_eq!(icons, vec![StatIcon::Briefcase, StatIcon::File, StatIcon::File]);
}
