use chrono::{DateTime, TimeZone, Utc};

use crate::models::{Event, TicketPrices};

/// Fixed event catalog loaded into the store at startup. This is the only
/// source of event data in the system.
pub(super) fn seed_events() -> Vec<Event> {
    vec![
        Event {
            id: 1,
            title: "Coachella Valley Music and Arts Festival 2024".into(),
            description: "One of the world's most prestigious music festivals featuring top \
                          artists, art installations, and cultural experiences."
                .into(),
            venue: "Empire Polo Club, Indio, California".into(),
            date: day(2024, 4, 12),
            image_url: "https://images.unsplash.com/photo-1541704328070-20bf4601ae3e".into(),
            ticket_types: TicketPrices {
                membership: 15000,
                regular: 25000,
                vip: 45000,
                vvip: 85000,
            },
        },
        Event {
            id: 2,
            title: "Tomorrowland 2024".into(),
            description: "The world's largest electronic dance music festival, featuring \
                          spectacular stages and international DJs."
                .into(),
            venue: "Boom, Belgium".into(),
            date: day(2024, 7, 19),
            image_url: "https://images.unsplash.com/photo-1470225620780-dba8ba36b745".into(),
            ticket_types: TicketPrices {
                membership: 20000,
                regular: 35000,
                vip: 55000,
                vvip: 95000,
            },
        },
        Event {
            id: 3,
            title: "Ultra Music Festival Miami 2024".into(),
            description: "Premier electronic music festival featuring the world's top DJs and \
                          incredible production."
                .into(),
            venue: "Bayfront Park, Miami".into(),
            date: day(2024, 3, 22),
            image_url: "https://images.unsplash.com/photo-1459749411175-04bf5292ceea".into(),
            ticket_types: TicketPrices {
                membership: 18000,
                regular: 30000,
                vip: 50000,
                vvip: 90000,
            },
        },
        Event {
            id: 4,
            title: "Glastonbury Festival 2024".into(),
            description: "The largest greenfield music and performing arts festival in the world."
                .into(),
            venue: "Worthy Farm, Somerset, UK".into(),
            date: day(2024, 6, 26),
            image_url: "https://images.unsplash.com/photo-1506157786151-b8491531f063".into(),
            ticket_types: TicketPrices {
                membership: 22000,
                regular: 38000,
                vip: 60000,
                vvip: 100000,
            },
        },
        Event {
            id: 5,
            title: "EDC Las Vegas 2024".into(),
            description: "Electric Daisy Carnival - America's largest dance music festival with \
                          spectacular production."
                .into(),
            venue: "Las Vegas Motor Speedway".into(),
            date: day(2024, 5, 17),
            image_url: "https://images.unsplash.com/photo-1516450360452-9312f5e86fc7".into(),
            ticket_types: TicketPrices {
                membership: 19000,
                regular: 32000,
                vip: 52000,
                vvip: 92000,
            },
        },
    ]
}

fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("catalog date is a valid calendar date")
}
