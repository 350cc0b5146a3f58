//! Static landing page content
//!
//! Everything on the page except the newsletter form is fixed copy.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

pub const BRAND: &str = "FASHION";

pub const NAV_ITEMS: [&str; 4] = ["CATALOGUE", "FASHION", "FAVOURITE", "LIFESTYLE"];

pub const SIGN_UP: &str = "SIGN UP";

pub const HERO_HEADLINE: [&str; 4] = ["LET'S", "EXPLORE", "UNIQUE", "CLOTHES."];
pub const HERO_TAGLINE: &str = "Live for Influential and Innovative fashion!";
pub const HERO_CTA: &str = "Shop Now";

pub const BRANDS: [&str; 6] = ["H&M", "Obey", "Shopify", "Lacoste", "Levi's", "Amazon"];

/// A product tile: title plus the link text under it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub title: &'static str,
    pub subtitle: &'static str,
}

const EXPLORE: &str = "Explore Now!";

pub const NEW_ARRIVALS: [Card; 3] = [
    Card { title: "Hoodies & Sweatshirt", subtitle: EXPLORE },
    Card { title: "Coats & Parkas", subtitle: EXPLORE },
    Card { title: "Tees & T-Shirt", subtitle: EXPLORE },
];

pub const FAVOURITES: [Card; 2] = [
    Card { title: "Trending on instagram", subtitle: EXPLORE },
    Card { title: "All Under $40", subtitle: EXPLORE },
];

pub const SALE_HEADLINE: &str = "PAYDAY SALE NOW";
pub const SALE_COPY: &str = "Spend minimal $100 get 30% off voucher code for your next purchase";
pub const SALE_DATES: &str = "1 June - 10 June 2021";
pub const SALE_TERMS: &str = "*Terms & Conditions apply";
pub const SALE_CTA: &str = "SHOP NOW";

pub const APP_HEADLINE: &str = "DOWNLOAD APP & GET THE VOUCHER!";
pub const APP_COPY: &str =
    "Get 30% off for first transaction using Rondovision mobile app for now.";
pub const APP_BADGES: [&str; 2] = ["Download on the App Store", "Get it on Google Play"];

pub const NEWSLETTER_TITLE: &str = "JOIN SHOPPING COMMUNITY TO GET MONTHLY PROMO";
pub const NEWSLETTER_COPY: &str = "Type your email down below and be young wild generation";
pub const EMAIL_PLACEHOLDER: &str = "Add your email here";

pub const FOOTER_TAGLINE: &str = "Complete your style with awesome clothes from us.";
pub const SOCIALS: [&str; 4] = ["Facebook", "Instagram", "Twitter", "LinkedIn"];

/// One titled column of footer links
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [&'static str],
}

pub const FOOTER_COLUMNS: [FooterColumn; 3] = [
    FooterColumn {
        title: "Company",
        links: &["About", "Contact us", "Support", "Careers"],
    },
    FooterColumn {
        title: "Quick Link",
        links: &["Share Location", "Orders Tracking", "Size Guide", "FAQs"],
    },
    FooterColumn {
        title: "Legal",
        links: &["Terms & conditions", "Privacy Policy"],
    },
];

/// Text styles for the page body, flattened to plain text without colors
struct Palette {
    heading: Style,
    accent: Style,
    muted: Style,
}

impl Palette {
    fn new(colors: bool) -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        if colors {
            Self {
                heading: bold.fg(Color::White),
                accent: bold.fg(Color::Yellow),
                muted: Style::default().fg(Color::DarkGray),
            }
        } else {
            Self {
                heading: bold,
                accent: bold,
                muted: Style::default(),
            }
        }
    }
}

/// Lines of the scrollable page body, top to bottom
pub fn page_lines(colors: bool) -> Vec<Line<'static>> {
    let palette = Palette::new(colors);
    let mut lines = Vec::new();

    // Hero
    lines.push(Line::default());
    for (i, word) in HERO_HEADLINE.iter().enumerate() {
        // Highlighted words alternate like the banner strokes
        let style = if i % 2 == 0 { palette.accent } else { palette.heading };
        lines.push(Line::from(Span::styled(*word, style)));
    }
    lines.push(Line::default());
    lines.push(Line::from(HERO_TAGLINE));
    lines.push(Line::from(Span::styled(format!("[ {} ]", HERO_CTA), palette.accent)));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(BRANDS.join("   "), palette.muted)));

    section(&mut lines, "NEW ARRIVALS", &palette);
    cards(&mut lines, &NEW_ARRIVALS, &palette);

    section(&mut lines, SALE_HEADLINE, &palette);
    lines.push(Line::from(SALE_COPY));
    lines.push(Line::from(Span::styled(SALE_DATES, palette.muted)));
    lines.push(Line::from(Span::styled(SALE_TERMS, palette.muted)));
    lines.push(Line::from(Span::styled(format!("[ {} ]", SALE_CTA), palette.accent)));

    section(&mut lines, "Young’s Favourite", &palette);
    cards(&mut lines, &FAVOURITES, &palette);

    section(&mut lines, APP_HEADLINE, &palette);
    lines.push(Line::from(APP_COPY));
    lines.push(Line::from(Span::styled(
        APP_BADGES.map(|b| format!("[ {} ]", b)).join("  "),
        palette.muted,
    )));

    // Footer
    section(&mut lines, BRAND, &palette);
    lines.push(Line::from(FOOTER_TAGLINE));
    lines.push(Line::from(Span::styled(SOCIALS.join(" · "), palette.muted)));
    for column in FOOTER_COLUMNS {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(column.title, palette.heading)));
        for link in column.links {
            lines.push(Line::from(Span::styled(format!("  {}", link), palette.muted)));
        }
    }

    lines
}

fn section(lines: &mut Vec<Line<'static>>, title: &'static str, palette: &Palette) {
    lines.push(Line::default());
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(title, palette.heading)));
    lines.push(Line::from(Span::styled("─".repeat(title.chars().count()), palette.accent)));
}

fn cards(lines: &mut Vec<Line<'static>>, cards: &[Card], palette: &Palette) {
    for card in cards {
        lines.push(Line::from(vec![
            Span::raw(card.title),
            Span::raw("  "),
            Span::styled(format!("{} →", card.subtitle), palette.muted),
        ]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_page_contains_every_section() {
        let body = text(&page_lines(true));

        for needle in [
            HERO_TAGLINE,
            "NEW ARRIVALS",
            "Coats & Parkas",
            SALE_HEADLINE,
            "All Under $40",
            APP_COPY,
            FOOTER_TAGLINE,
            "Privacy Policy",
        ] {
            assert!(body.contains(needle), "missing {:?}", needle);
        }
    }

    #[test]
    fn test_plain_palette_has_no_colors() {
        let lines = page_lines(false);
        assert!(lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .all(|s| s.style.fg.is_none()));
    }
}
