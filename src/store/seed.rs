use crate::schema::{EventDate, InsertEvent};

struct Demo {
  title: &'static str,
  date: &'static str,
  location: &'static str,
  description: &'static str,
  category: &'static str,
  image: &'static str,
}

// Dates carry no offset and are taken as UTC.
const DEMO_EVENTS: &[Demo] = &[
  Demo {
    title: "Interfaith Prayer Gathering",
    date: "2025-04-15T18:00:00",
    location: "Community Center, 123 Main St",
    description: "Join us for an evening of shared prayer, reflection, and dialogue across different faith traditions.",
    category: "Religious",
    image: "https://images.unsplash.com/photo-1576267423445-b2e0074d68a4?w=600&h=300&fit=crop",
  },
  Demo {
    title: "Community Food Drive",
    date: "2025-04-22T10:00:00",
    location: "City Park, 789 Park Avenue",
    description: "Help us collect non-perishable food items for local families in need. All donations welcome!",
    category: "Charity",
    image: "https://images.unsplash.com/photo-1509099836639-18ba1795216d?w=600&h=300&fit=crop",
  },
  Demo {
    title: "Multicultural Festival",
    date: "2025-05-05T12:00:00",
    location: "Community Plaza, 456 Center St",
    description: "Celebrate diversity with food, music, dance, and art from different cultures around the world.",
    category: "Social",
    image: "https://images.unsplash.com/photo-1511632765486-a01980e01a18?w=600&h=300&fit=crop",
  },
  Demo {
    title: "Faith Leadership Workshop",
    date: "2025-05-12T09:00:00",
    location: "Community College, 321 Education Blvd",
    description: "A workshop on community leadership and organization for faith leaders and interested community members.",
    category: "Educational",
    image: "https://images.unsplash.com/photo-1526948128573-703ee1aeb6fa?w=600&h=300&fit=crop",
  },
  Demo {
    title: "Youth Mentorship Program",
    date: "2025-05-20T16:00:00",
    location: "Youth Center, 555 Community Ln",
    description: "Connect with youth in our community through our mentorship program. Training provided for all mentors.",
    category: "Community",
    image: "https://images.unsplash.com/photo-1587825140708-dfaf72ae4b04?w=600&h=300&fit=crop",
  },
  Demo {
    title: "Community Potluck",
    date: "2025-06-01T17:30:00",
    location: "Community Garden, 777 Green St",
    description: "Bring a dish to share! A wonderful opportunity to connect over food and conversation with neighbors.",
    category: "Social",
    image: "https://images.unsplash.com/photo-1523580494863-6f3031224c94?w=600&h=300&fit=crop",
  },
];

pub(super) fn demo_events() -> impl Iterator<Item = InsertEvent> {
  DEMO_EVENTS.iter().map(|demo| InsertEvent {
    title: demo.title.to_string(),
    date: EventDate::Iso8601(demo.date.to_string()),
    location: demo.location.to_string(),
    description: demo.description.to_string(),
    category: demo.category.to_string(),
    image: Some(demo.image.to_string()),
  })
}
