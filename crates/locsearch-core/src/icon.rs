//! Semantic icon tags the host UI maps to glyphs.

use serde::{Deserialize, Serialize};

/// Closed set of icons a location can be tagged with.
///
/// Serialized in `snake_case` (`AsianCuisine` -> `"asian_cuisine"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationIcon {
    Airport,
    AmericanFootball,
    AmusementPark,
    ArtGallery,
    AsianCuisine,
    Atm,
    Bakery,
    Bank,
    Bar,
    Baseball,
    Basketball,
    Bike,
    Boat,
    BookStore,
    Breakfast,
    BuddhistTemple,
    Burger,
    Bus,
    CableCar,
    Cafe,
    Car,
    CarRental,
    CarRepair,
    CarWash,
    Casino,
    CellPhoneStore,
    ChargingStation,
    Church,
    Circus,
    Clinic,
    ClothingStore,
    ConcertHall,
    ConvenienceStore,
    Courthouse,
    Cricket,
    Dentist,
    DiscountStore,
    ElectricScooter,
    FastFood,
    FireDepartment,
    FitnessCenter,
    Florist,
    Forest,
    FurnitureStore,
    GasStation,
    GenericTransit,
    Golf,
    GovernmentBuilding,
    Gymnastics,
    HairSalon,
    Hiking,
    HinduTemple,
    Hockey,
    Hospital,
    Hotel,
    IceCream,
    JapaneseCuisine,
    Kayaking,
    Kebab,
    Kiosk,
    Laundromat,
    Library,
    LiquorStore,
    MartialArts,
    Monument,
    Moped,
    Mosque,
    Motorcycle,
    Motorsports,
    MovieTheater,
    Museum,
    NightClub,
    Optician,
    Paragliding,
    Park,
    Parking,
    PetStore,
    Pharmacy,
    Physician,
    Pizza,
    PlaceOfWorship,
    Police,
    PostOffice,
    Pub,
    PublicBathroom,
    Ramen,
    Restaurant,
    Rugby,
    School,
    Shopping,
    ShoppingMall,
    Skateboarding,
    Skiing,
    Soccer,
    Soup,
    Sports,
    Stadium,
    Subway,
    Supermarket,
    Surfing,
    Swimming,
    Synagogue,
    Taxi,
    Tennis,
    Theater,
    Train,
    Tram,
    University,
    Volleyball,
}

impl LocationIcon {
    /// Stable `snake_case` name, identical to the serialized form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LocationIcon::Airport => "airport",
            LocationIcon::AmericanFootball => "american_football",
            LocationIcon::AmusementPark => "amusement_park",
            LocationIcon::ArtGallery => "art_gallery",
            LocationIcon::AsianCuisine => "asian_cuisine",
            LocationIcon::Atm => "atm",
            LocationIcon::Bakery => "bakery",
            LocationIcon::Bank => "bank",
            LocationIcon::Bar => "bar",
            LocationIcon::Baseball => "baseball",
            LocationIcon::Basketball => "basketball",
            LocationIcon::Bike => "bike",
            LocationIcon::Boat => "boat",
            LocationIcon::BookStore => "book_store",
            LocationIcon::Breakfast => "breakfast",
            LocationIcon::BuddhistTemple => "buddhist_temple",
            LocationIcon::Burger => "burger",
            LocationIcon::Bus => "bus",
            LocationIcon::CableCar => "cable_car",
            LocationIcon::Cafe => "cafe",
            LocationIcon::Car => "car",
            LocationIcon::CarRental => "car_rental",
            LocationIcon::CarRepair => "car_repair",
            LocationIcon::CarWash => "car_wash",
            LocationIcon::Casino => "casino",
            LocationIcon::CellPhoneStore => "cell_phone_store",
            LocationIcon::ChargingStation => "charging_station",
            LocationIcon::Church => "church",
            LocationIcon::Circus => "circus",
            LocationIcon::Clinic => "clinic",
            LocationIcon::ClothingStore => "clothing_store",
            LocationIcon::ConcertHall => "concert_hall",
            LocationIcon::ConvenienceStore => "convenience_store",
            LocationIcon::Courthouse => "courthouse",
            LocationIcon::Cricket => "cricket",
            LocationIcon::Dentist => "dentist",
            LocationIcon::DiscountStore => "discount_store",
            LocationIcon::ElectricScooter => "electric_scooter",
            LocationIcon::FastFood => "fast_food",
            LocationIcon::FireDepartment => "fire_department",
            LocationIcon::FitnessCenter => "fitness_center",
            LocationIcon::Florist => "florist",
            LocationIcon::Forest => "forest",
            LocationIcon::FurnitureStore => "furniture_store",
            LocationIcon::GasStation => "gas_station",
            LocationIcon::GenericTransit => "generic_transit",
            LocationIcon::Golf => "golf",
            LocationIcon::GovernmentBuilding => "government_building",
            LocationIcon::Gymnastics => "gymnastics",
            LocationIcon::HairSalon => "hair_salon",
            LocationIcon::Hiking => "hiking",
            LocationIcon::HinduTemple => "hindu_temple",
            LocationIcon::Hockey => "hockey",
            LocationIcon::Hospital => "hospital",
            LocationIcon::Hotel => "hotel",
            LocationIcon::IceCream => "ice_cream",
            LocationIcon::JapaneseCuisine => "japanese_cuisine",
            LocationIcon::Kayaking => "kayaking",
            LocationIcon::Kebab => "kebab",
            LocationIcon::Kiosk => "kiosk",
            LocationIcon::Laundromat => "laundromat",
            LocationIcon::Library => "library",
            LocationIcon::LiquorStore => "liquor_store",
            LocationIcon::MartialArts => "martial_arts",
            LocationIcon::Monument => "monument",
            LocationIcon::Moped => "moped",
            LocationIcon::Mosque => "mosque",
            LocationIcon::Motorcycle => "motorcycle",
            LocationIcon::Motorsports => "motorsports",
            LocationIcon::MovieTheater => "movie_theater",
            LocationIcon::Museum => "museum",
            LocationIcon::NightClub => "night_club",
            LocationIcon::Optician => "optician",
            LocationIcon::Paragliding => "paragliding",
            LocationIcon::Park => "park",
            LocationIcon::Parking => "parking",
            LocationIcon::PetStore => "pet_store",
            LocationIcon::Pharmacy => "pharmacy",
            LocationIcon::Physician => "physician",
            LocationIcon::Pizza => "pizza",
            LocationIcon::PlaceOfWorship => "place_of_worship",
            LocationIcon::Police => "police",
            LocationIcon::PostOffice => "post_office",
            LocationIcon::Pub => "pub",
            LocationIcon::PublicBathroom => "public_bathroom",
            LocationIcon::Ramen => "ramen",
            LocationIcon::Restaurant => "restaurant",
            LocationIcon::Rugby => "rugby",
            LocationIcon::School => "school",
            LocationIcon::Shopping => "shopping",
            LocationIcon::ShoppingMall => "shopping_mall",
            LocationIcon::Skateboarding => "skateboarding",
            LocationIcon::Skiing => "skiing",
            LocationIcon::Soccer => "soccer",
            LocationIcon::Soup => "soup",
            LocationIcon::Sports => "sports",
            LocationIcon::Stadium => "stadium",
            LocationIcon::Subway => "subway",
            LocationIcon::Supermarket => "supermarket",
            LocationIcon::Surfing => "surfing",
            LocationIcon::Swimming => "swimming",
            LocationIcon::Synagogue => "synagogue",
            LocationIcon::Taxi => "taxi",
            LocationIcon::Tennis => "tennis",
            LocationIcon::Theater => "theater",
            LocationIcon::Train => "train",
            LocationIcon::Tram => "tram",
            LocationIcon::University => "university",
            LocationIcon::Volleyball => "volleyball",
        }
    }
}

impl std::fmt::Display for LocationIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_str_matches_serde_name() {
        for icon in [
            LocationIcon::AsianCuisine,
            LocationIcon::Atm,
            LocationIcon::CellPhoneStore,
            LocationIcon::PlaceOfWorship,
        ] {
            let json = serde_json::to_string(&icon).unwrap();
            assert_eq!(json, format!("\"{}\"", icon.as_str()));
        }
    }

    #[test]
    fn deserializes_snake_case() {
        let icon: LocationIcon = serde_json::from_str("\"american_football\"").unwrap();
        assert_eq!(icon, LocationIcon::AmericanFootball);
    }
}
