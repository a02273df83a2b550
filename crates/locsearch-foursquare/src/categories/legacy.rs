//! Icon rules for the numeric category taxonomy of the older places API.
//!
//! Numeric codes nest: a top-level group owns a block of codes (e.g. all of
//! `13000..=13392` is food and drink) and narrower categories sit inside it.
//! Rules are evaluated in declared order and the first match wins, so every
//! narrow rule must appear before the range that contains it.

use locsearch_core::LocationIcon;

/// One entry of the ordered numeric rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryRule {
    /// Matches a single code.
    Exact(i64, LocationIcon),
    /// Matches every code in `lo..=hi`.
    Range(i64, i64, LocationIcon),
}

impl CategoryRule {
    /// Returns the rule's icon if `code` falls under it.
    #[must_use]
    pub fn matches(&self, code: i64) -> Option<LocationIcon> {
        match *self {
            CategoryRule::Exact(id, icon) if id == code => Some(icon),
            CategoryRule::Range(lo, hi, icon) if (lo..=hi).contains(&code) => Some(icon),
            _ => None,
        }
    }
}

use CategoryRule::{Exact, Range};
use LocationIcon as I;

#[rustfmt::skip]
pub const LEGACY_CATEGORY_RULES: &[CategoryRule] = &[
    // Arts and Entertainment
    Exact(10001, I::AmusementPark),    // Amusement Park
    Exact(10003, I::AmusementPark),    // Arcade
    Exact(10004, I::ArtGallery),       // Art Gallery
    Exact(10008, I::Casino),           // Casino
    Exact(10009, I::Circus),           // Circus
    Exact(10017, I::AmusementPark),    // Escape Room
    Range(10024, 10026, I::MovieTheater), // Movie Theater
    Range(10027, 10031, I::Museum),    // Museum
    Exact(10032, I::NightClub),        // Night Club
    Exact(10037, I::ConcertHall),      // Concert Hall
    Exact(10039, I::ConcertHall),      // Music Venue
    Range(10035, 10043, I::Theater),   // Performing Arts Venue
    Range(10051, 10055, I::Stadium),   // Stadium
    Exact(10056, I::AmusementPark),    // Water Park

    // Business and Professional Services
    Exact(11011, I::CarWash),          // Car Wash
    Exact(11010, I::Car),              // Car Dealership
    Range(11009, 11017, I::CarRepair), // Automotive Service
    Exact(11044, I::Atm),              // ATM
    Range(11045, 11046, I::Bank),      // Bank
    Range(11061, 11063, I::HairSalon), // Salon / Barbershop
    Exact(11070, I::Laundromat),       // Laundry Service

    // Community and Government
    Range(12013, 12052, I::University), // College and University
    Range(12056, 12063, I::School),    // Primary and Secondary School
    Range(12009, 12063, I::School),    // Education
    Exact(12070, I::Courthouse),       // Courthouse
    Exact(12071, I::FireDepartment),   // Fire Station
    Exact(12072, I::Police),           // Police Station
    Exact(12075, I::PostOffice),       // Post Office
    Range(12064, 12076, I::GovernmentBuilding), // Government Building
    Exact(12080, I::Library),          // Library
    Exact(12100, I::BuddhistTemple),   // Buddhist Temple
    Exact(12101, I::Church),           // Church
    Exact(12104, I::HinduTemple),      // Hindu Temple
    Exact(12106, I::Mosque),           // Mosque
    Exact(12109, I::Synagogue),        // Synagogue
    Range(12098, 12112, I::PlaceOfWorship), // Spiritual Center
    Exact(12119, I::PublicBathroom),   // Public Bathroom

    // Dining and Drinking
    Exact(13002, I::Bakery),           // Bakery
    Exact(13018, I::Pub),              // Pub
    Range(13003, 13025, I::Bar),       // Bar
    Exact(13028, I::Breakfast),        // Breakfast Spot
    Exact(13031, I::Burger),           // Burger Joint
    Range(13032, 13037, I::Cafe),      // Cafe, Coffee, and Tea House
    Exact(13046, I::IceCream),         // Ice Cream Parlor
    Exact(13064, I::Pizza),            // Pizzeria
    Exact(13145, I::FastFood),         // Fast Food Restaurant
    Exact(13272, I::Ramen),            // Ramen Restaurant
    Range(13263, 13285, I::JapaneseCuisine), // Japanese Restaurant
    Range(13072, 13148, I::AsianCuisine), // Asian Restaurant
    Range(13289, 13291, I::AsianCuisine), // Korean Restaurant
    Range(13352, 13353, I::AsianCuisine), // Thai Restaurant
    Exact(13358, I::AsianCuisine),     // Vietnamese Restaurant
    Exact(13314, I::Kebab),            // Kebab Restaurant
    Exact(13334, I::Soup),             // Soup Spot
    Range(13000, 13392, I::Restaurant), // Dining and Drinking

    // Health and Medicine
    Exact(15007, I::Dentist),          // Dentist
    Range(15014, 15016, I::Hospital),  // Hospital
    Exact(15024, I::Optician),         // Optometrist
    Range(15027, 15053, I::Physician), // Physician
    Range(15000, 15062, I::Clinic),    // Health and Medicine

    // Landmarks and Outdoors
    Exact(16015, I::Forest),           // Forest
    Exact(16019, I::Hiking),           // Hiking Trail
    Exact(16020, I::Monument),         // Historic and Protected Site
    Exact(16026, I::Monument),         // Monument
    Range(16032, 16039, I::Park),      // Park
    Exact(16046, I::Surfing),          // Surf Spot

    // Retail
    Exact(17018, I::BookStore),        // Bookstore
    Exact(17029, I::ConvenienceStore), // Convenience Store
    Range(17035, 17036, I::Pharmacy),  // Drugstore
    Range(17043, 17058, I::ClothingStore), // Fashion Retail
    Exact(17059, I::Florist),          // Flower Store
    Range(17061, 17062, I::FurnitureStore), // Furniture and Home Store
    Range(17069, 17072, I::Supermarket), // Grocery Store
    Exact(17076, I::LiquorStore),      // Liquor Store
    Exact(17085, I::CellPhoneStore),   // Mobile Phone Store
    Exact(17110, I::PetStore),         // Pet Supplies Store
    Exact(17114, I::ShoppingMall),     // Shopping Mall
    Exact(17115, I::DiscountStore),    // Discount Store
    Range(17000, 17145, I::Shopping),  // Retail

    // Sports and Recreation
    Range(18008, 18009, I::Baseball),  // Baseball Field
    Exact(18010, I::Basketball),       // Basketball Court
    Exact(18013, I::AmericanFootball), // Football Field
    Exact(18027, I::MartialArts),      // Martial Arts Dojo
    Range(18021, 18033, I::FitnessCenter), // Gym and Studio
    Range(18035, 18037, I::Golf),      // Golf Course
    Exact(18039, I::Soccer),           // Soccer Field
    Range(18046, 18050, I::Skiing),    // Ski Area
    Exact(18055, I::Skateboarding),    // Skate Park
    Exact(18056, I::Stadium),          // Sports Stadium
    Exact(18067, I::Swimming),         // Swimming Pool
    Exact(18069, I::Tennis),           // Tennis Court
    Exact(18073, I::Volleyball),       // Volleyball Court
    Exact(18074, I::Hockey),           // Hockey Rink
    Range(18000, 18080, I::Sports),    // Sports and Recreation

    // Travel and Transportation
    Exact(19006, I::ChargingStation),  // Electric Vehicle Charging Station
    Exact(19007, I::GasStation),       // Fuel Station
    Exact(19020, I::Parking),          // Parking
    Range(19009, 19021, I::Hotel),     // Lodging
    Exact(19027, I::Bike),             // Bike Rental
    Range(19040, 19045, I::Airport),   // Airport
    Range(19046, 19047, I::Bus),       // Bus Station
    Exact(19048, I::Subway),           // Metro Station
    Range(19049, 19050, I::Train),     // Rail Station
    Exact(19051, I::Tram),             // Tram Station
    Exact(19052, I::Taxi),             // Taxi
    Range(19053, 19055, I::Boat),      // Ferry / Boat
    Exact(19056, I::CarRental),        // Rental Car Location
    Range(19000, 19070, I::GenericTransit), // Travel and Transportation
];

/// Classifies a numeric category code, first matching rule wins.
#[must_use]
pub fn icon_for_legacy_code(code: i64) -> Option<LocationIcon> {
    classify_with(LEGACY_CATEGORY_RULES, code)
}

/// Evaluates `rules` in order against `code`.
#[must_use]
pub fn classify_with(rules: &[CategoryRule], code: i64) -> Option<LocationIcon> {
    rules.iter().find_map(|rule| rule.matches(code))
}
