//! Text rendering of journey pages.

use std::fmt::Write;

use crate::domain::{Journey, display_timestamp};

use super::page::PageResult;

/// Render one journey as an indented, numbered block.
///
/// The route line is only shown for journeys with changes, and lists
/// public transport legs only.
pub fn render_journey(number: usize, journey: &Journey) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "  {number}. Depart: {} → Arrive: {}",
        display_timestamp(&journey.departure),
        display_timestamp(&journey.arrival),
    );
    let _ = writeln!(
        out,
        "     Duration: {} | {}",
        journey.duration(),
        journey.transfer_label(),
    );

    if !journey.is_direct()
        && let Some(route) = journey.route_chain()
    {
        let _ = writeln!(out, "     Route: {route}");
    }

    out
}

/// Render the pagination summary: totals, page position and shown range.
pub fn render_summary<T>(page: &PageResult<'_, T>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Found {} journey option(s)", page.total);
    if !page.is_empty() {
        let _ = writeln!(
            out,
            "📋 Showing results {}-{} of {}",
            page.first_shown(),
            page.last_shown(),
            page.total,
        );
    }
    let _ = writeln!(out, "📄 Page {}/{}", page.page, page.total_pages);

    out
}

/// Footer pointing at the next page, if there is one.
pub fn next_page_hint<T>(page: &PageResult<'_, T>) -> Option<String> {
    page.next_page()
        .map(|next| format!("💡 To see more results, request page {next}"))
}

/// Render a full page: summary, numbered journeys, and the next-page hint.
pub fn render_page(page: &PageResult<'_, Journey>) -> String {
    let mut out = render_summary(page);
    out.push('\n');

    for (number, journey) in page.numbered() {
        out.push_str(&render_journey(number, journey));
        out.push('\n');
    }

    if let Some(hint) = next_page_hint(page) {
        out.push_str(&hint);
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Section, SectionPlace, SectionType};
    use crate::paging::{PageRequest, paginate};

    fn place(name: &str) -> Option<SectionPlace> {
        Some(SectionPlace {
            id: None,
            name: Some(name.to_string()),
        })
    }

    fn leg(kind: SectionType, from: &str, to: &str) -> Section {
        Section {
            section_type: kind,
            from: place(from),
            to: place(to),
        }
    }

    fn direct(departure: &str) -> Journey {
        Journey {
            departure: departure.to_string(),
            arrival: "20251128T113000".to_string(),
            duration_secs: 3 * 3600 + 7 * 60 + 42,
            transfers: 0,
            sections: vec![leg(SectionType::PublicTransport, "Paris", "Marseille")],
        }
    }

    fn with_change() -> Journey {
        Journey {
            departure: "20251128T083000".to_string(),
            arrival: "20251128T140500".to_string(),
            duration_secs: 5 * 3600 + 35 * 60,
            transfers: 1,
            sections: vec![
                leg(SectionType::StreetNetwork, "Paris", "Paris Gare de Lyon"),
                leg(SectionType::PublicTransport, "Paris Gare de Lyon", "Lyon Part-Dieu"),
                leg(SectionType::Transfer, "Lyon Part-Dieu", "Lyon Part-Dieu"),
                leg(SectionType::PublicTransport, "Lyon Part-Dieu", "Marseille Saint-Charles"),
            ],
        }
    }

    #[test]
    fn direct_journey_block() {
        let text = render_journey(1, &direct("20251128T083000"));
        assert_eq!(
            text,
            "  1. Depart: 2025-11-28 08:30 → Arrive: 2025-11-28 11:30\n     Duration: 3h 7min | Direct\n"
        );
    }

    #[test]
    fn journey_with_change_shows_route() {
        let text = render_journey(12, &with_change());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "  12. Depart: 2025-11-28 08:30 → Arrive: 2025-11-28 14:05");
        assert_eq!(lines[1], "     Duration: 5h 35min | 1 change(s)");
        assert_eq!(
            lines[2],
            "     Route: Paris Gare de Lyon → Lyon Part-Dieu | Lyon Part-Dieu → Marseille Saint-Charles"
        );
    }

    #[test]
    fn change_without_public_transport_has_no_route() {
        let mut journey = with_change();
        journey.sections.retain(|s| !s.is_public_transport());

        assert_eq!(render_journey(1, &journey).lines().count(), 2);
    }

    #[test]
    fn summary_reports_range_and_pages() {
        let journeys: Vec<Journey> = (0..23).map(|_| direct("20251128T083000")).collect();
        let page = paginate(&journeys, PageRequest::new(3)).unwrap();

        assert_eq!(
            render_summary(&page),
            "Found 23 journey option(s)\n📋 Showing results 21-23 of 23\n📄 Page 3/3\n"
        );
    }

    #[test]
    fn page_numbers_journeys_from_offset() {
        let journeys: Vec<Journey> = (0..23).map(|_| direct("20251128T083000")).collect();
        let page = paginate(&journeys, PageRequest::new(2)).unwrap();
        let text = render_page(&page);

        assert!(text.contains("  11. Depart:"));
        assert!(text.contains("  20. Depart:"));
        assert!(!text.contains("  10. Depart:"));
        assert!(!text.contains("  21. Depart:"));
        assert!(text.ends_with("💡 To see more results, request page 3\n"));
    }

    #[test]
    fn last_page_has_no_hint() {
        let journeys: Vec<Journey> = (0..23).map(|_| direct("20251128T083000")).collect();
        let page = paginate(&journeys, PageRequest::new(3)).unwrap();

        assert!(next_page_hint(&page).is_none());
        assert!(!render_page(&page).contains("request page"));
    }

    #[test]
    fn page_preserves_input_order() {
        let journeys = vec![
            direct("20251128T100000"),
            direct("20251128T060000"),
            direct("20251128T080000"),
        ];
        let page = paginate(&journeys, PageRequest::new(1)).unwrap();
        let text = render_page(&page);

        let ten = text.find("10:00").unwrap();
        let six = text.find("06:00").unwrap();
        let eight = text.find("08:00").unwrap();
        assert!(ten < six && six < eight);
    }

    #[test]
    fn malformed_timestamp_renders_without_error() {
        let text = render_journey(1, &direct("garbage"));
        assert!(text.starts_with("  1. Depart: garb-ag-e : → Arrive:"));
    }
}
