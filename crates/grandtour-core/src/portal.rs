//! Static showcase content for the role portals.
//!
//! Mock figures only. Nothing here is computed or fetched.

use serde::Serialize;

/// Portal family rendered by a dashboard view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Portal {
    Executive,
    ClientClub,
    Partner,
    B2b,
    Crew,
    Operator,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Tile {
    pub label: &'static str,
    pub value: &'static str,
    pub note: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PortalContent {
    pub headline: &'static str,
    pub tagline: &'static str,
    pub tiles: &'static [Tile],
}

const fn tile(label: &'static str, value: &'static str, note: &'static str) -> Tile {
    Tile { label, value, note }
}

static EXECUTIVE: PortalContent = PortalContent {
    headline: "Executive dashboard",
    tagline: "Season overview across fleet, bookings and revenue",
    tiles: &[
        tile("Revenue (MTD)", "₽ 48.2M", "+12% vs last season"),
        tile("Fleet utilisation", "78%", "yachts, helicopters, buggies"),
        tile("Active bookings", "214", "37 arriving this week"),
        tile("NPS", "71", "club members"),
    ],
};

static CLIENT_CLUB: PortalContent = PortalContent {
    headline: "Client club",
    tagline: "Your membership, bookings and privileges",
    tiles: &[
        tile("Status points", "12 450", "2 550 to next tier"),
        tile("Upcoming trip", "Yacht sunset cruise", "Sat 18:30, Sochi marina"),
        tile("Concierge", "24/7", "reply within 10 minutes"),
    ],
};

static PARTNER: PortalContent = PortalContent {
    headline: "Partner portal",
    tagline: "Referrals, commissions and shared inventory",
    tiles: &[
        tile("Referred guests", "63", "this season"),
        tile("Commission due", "₽ 412 000", "payout on the 5th"),
        tile("Open offers", "9", "co-branded packages"),
    ],
};

static B2B: PortalContent = PortalContent {
    headline: "Corporate portal",
    tagline: "Team events, contracts and invoices",
    tiles: &[
        tile("Events planned", "4", "next: offsite, Krasnaya Polyana"),
        tile("Contract limit", "₽ 3.5M", "61% used"),
        tile("Invoices", "2 pending", "net 30"),
    ],
};

static CREW: PortalContent = PortalContent {
    headline: "Crew app",
    tagline: "Shifts, assignments and equipment status",
    tiles: &[
        tile("Next shift", "06:00", "Heli pad B"),
        tile("Assignments", "3 today", "1 VIP transfer"),
        tile("Maintenance", "1 open", "buggy #12 brakes"),
    ],
};

static OPERATOR: PortalContent = PortalContent {
    headline: "Operator panel",
    tagline: "Dispatch board and booking desk",
    tiles: &[
        tile("Requests in queue", "17", "5 urgent"),
        tile("Units on duty", "22", "4 in maintenance"),
        tile("Conversion today", "34%", "sales desk"),
    ],
};

impl Portal {
    pub fn content(self) -> &'static PortalContent {
        match self {
            Portal::Executive => &EXECUTIVE,
            Portal::ClientClub => &CLIENT_CLUB,
            Portal::Partner => &PARTNER,
            Portal::B2b => &B2B,
            Portal::Crew => &CREW,
            Portal::Operator => &OPERATOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_portal_has_tiles() {
        for portal in [
            Portal::Executive,
            Portal::ClientClub,
            Portal::Partner,
            Portal::B2b,
            Portal::Crew,
            Portal::Operator,
        ] {
            let content = portal.content();
            assert!(!content.headline.is_empty());
            assert!(!content.tiles.is_empty(), "{portal:?}");
        }
    }
}
