//! Backend-shaped inventory records.
//!
//! Ids are emitted as Mongo-style `_id` strings since that is what the backend sends.

use serde_json::{json, Value};

pub fn hotel(id: u32, name: &str) -> Value {
    json!({
        "_id": id.to_string(),
        "name": name,
        "description": format!("{} on the Red Sea", name),
        "city": "Hurghada",
        "location": "Corniche Road",
        "price": "1200",
        "image": format!("https://cdn.example.com/hotels/{}.jpg", id),
        "video_link": "",
        "created_at": "2024-01-01T00:00:00Z",
    })
}

pub fn sea_trip(id: u32, name: &str) -> Value {
    json!({
        "_id": id.to_string(),
        "name": name,
        "description": format!("{} around Giftun Island", name),
        "location": "Giftun Island",
        "start_time": "09:00:00",
        "end_time": "16:30:00",
        "price": 800,
        "transportation": 100,
        "discount": "10%",
        "total_price": 900,
        "image_url": format!("https://cdn.example.com/seatrips/{}.jpg", id),
        "updated_at": "2024-01-02T00:00:00Z",
    })
}

pub fn safari(id: u32, name: &str) -> Value {
    json!({
        "_id": id.to_string(),
        "name": name,
        "description": format!("{} across the Eastern Desert", name),
        "location": "Eastern Desert",
        "start_time": "14:00",
        "end_time": "20:00",
        "price": "650",
        "transportation": "50",
        "total_price": "700",
        "image": format!("https://cdn.example.com/safaris/{}.jpg", id),
    })
}

/// `count` hotels wrapped in the `{ "hotels": [...] }` envelope
pub fn hotels_payload(count: u32) -> Value {
    json!({ "hotels": (1..=count).map(|i| hotel(i, &format!("Hotel {}", i))).collect::<Vec<_>>() })
}

/// `count` sea trips wrapped in the `{ "data": [...] }` envelope
pub fn sea_trips_payload(count: u32) -> Value {
    json!({ "data": (1..=count).map(|i| sea_trip(i, &format!("Sea Trip {}", i))).collect::<Vec<_>>() })
}

/// `count` safaris as a bare array
pub fn safaris_payload(count: u32) -> Value {
    Value::Array((1..=count).map(|i| safari(i, &format!("Safari {}", i))).collect())
}
