//! Seed data for the demo network
//!
//! Pure data, no rules: the houses, dogs, and discount of the reference
//! network, loaded through the registry's bulk operations. Used by the
//! demo binary and integration tests.

use crate::entity::{Discount, Dog, Gender, House};
use crate::error::ExchangeError;
use crate::registry::Registry;

pub fn breeding_houses() -> Vec<House> {
    vec![
        House::new("BH_1", "Daniel Elero BH")
            .set_address("StartIT 1, Novi Sad, Serbia")
            .set_phone("421492")
            .set_email("debh@bh.com")
            .set_balance(65000),
        House::new("BH_2", "Milan Sovic BH")
            .set_address("StartIT 2, Novi Sad, Serbia")
            .set_phone("98989986")
            .set_email("msbh@bh.com")
            .set_balance(53200),
        House::new("BH_3", "Aleksandar Andjelkovic BH")
            .set_address("StartIT 3, Novi Sad, Serbia")
            .set_phone("292929292")
            .set_email("aabh@bh.com")
            .set_balance(200),
        House::new("BH_4", "Aleksandar Okiljevic BH")
            .set_address("StartIT 4, Novi Sad, Serbia")
            .set_phone("12121241")
            .set_email("aobh@bh.com")
            .set_balance(10),
    ]
}

pub fn dogs() -> Vec<Dog> {
    vec![
        Dog::new("D_1", "Dzeki", Gender::Male, "BH_1")
            .set_price(4230)
            .set_mate_price(760)
            .set_breed("Mixed")
            .set_info("Dzeki is the CEO of the platform. He is not interested. . .")
            .set_photo_url("https://goo.gl/ntjUci"),
        Dog::new("D_2", "Charlie", Gender::Male, "BH_3")
            .set_price(5000)
            .set_mate_price(1300)
            .set_breed("Golden Retriever")
            .set_info("Charlie made 32 puppies!")
            .set_for_mate(true)
            .set_photo_url("https://goo.gl/8reEyB"),
        Dog::new("D_3", "Cooper", Gender::Male, "BH_2")
            .set_price(7200)
            .set_mate_price(2200)
            .set_breed("Husky")
            .set_info("Cooper is the fastest dog on platform")
            .set_for_sale(true)
            .set_photo_url("https://goo.gl/Dahn4e"),
        Dog::new("D_4", "Max", Gender::Male, "BH_2")
            .set_price(1500)
            .set_mate_price(380)
            .set_breed("Husky")
            .set_info("Max is not for sale and not in the mood")
            .set_photo_url("https://goo.gl/GcVHLo"),
        Dog::new("D_5", "Bella", Gender::Female, "BH_4")
            .set_price(1100)
            .set_mate_price(300)
            .set_breed("Golden Retriever")
            .set_info("Mia bella. . . . ")
            .set_for_mate(true)
            .set_photo_url("https://goo.gl/mz1N1p"),
        Dog::new("D_6", "Lucy", Gender::Female, "BH_3")
            .set_price(540)
            .set_mate_price(160)
            .set_breed("Husky")
            .set_info("Lucy is a good girl.")
            .set_for_sale(true)
            .set_photo_url("https://goo.gl/qmGJJV"),
        Dog::new("D_7", "Luna", Gender::Female, "BH_3")
            .set_price(10000)
            .set_mate_price(3000)
            .set_breed("Maltese")
            .set_info("Luna is the most expensive dog on the platform.")
            .set_for_sale(true)
            .set_photo_url("https://goo.gl/Ddgk2e")
            .set_father("D_10")
            .set_mother("D_9"),
        Dog::new("D_8", "Molly", Gender::Female, "BH_4")
            .set_price(750)
            .set_mate_price(250)
            .set_breed("Golden Retriever")
            .set_info("Aw aw aw aw")
            .set_for_sale(true)
            .set_for_mate(true)
            .set_photo_url("https://goo.gl/ThwUF2")
            .set_father("D_2")
            .set_mother("D_5"),
        Dog::new("D_9", "Maggie", Gender::Female, "BH_4")
            .set_price(1020)
            .set_mate_price(400)
            .set_breed("Maltese")
            .set_info("Maggie from the Simpsons")
            .set_for_sale(true)
            .set_for_mate(true)
            .set_photo_url("https://goo.gl/wdxmx1"),
        Dog::new("D_10", "Hacky", Gender::Male, "BH_1")
            .set_price(3200)
            .set_mate_price(500)
            .set_breed("Maltese")
            .set_info("Hacky hack.")
            .set_for_mate(true)
            .set_photo_url("https://goo.gl/AcZKuf"),
        Dog::new("D_11", "Dzek", Gender::Male, "BH_1")
            .set_price(1220)
            .set_mate_price(400)
            .set_breed("German Shepherd")
            .set_info("Dzek the dog.")
            .set_for_mate(true)
            .set_photo_url("https://goo.gl/J29y98")
            .set_father("D_2")
            .set_mother("D_5"),
        Dog::new("D_12", "Violin", Gender::Female, "BH_1")
            .set_price(2450)
            .set_mate_price(800)
            .set_breed("German Shepherd")
            .set_info("Play it.")
            .set_for_mate(true)
            .set_photo_url("https://goo.gl/6pZvVG")
            .set_father("D_11")
            .set_mother("D_7"),
    ]
}

pub fn discounts() -> Vec<Discount> {
    vec![Discount::new("DISC_1", "BH_1", "BH_2", 100)]
}

/// Load the whole demo network into a registry.
pub fn seed(registry: &Registry) -> Result<(), ExchangeError> {
    registry.update_houses(&breeding_houses())?;
    registry.update_dogs(&dogs())?;
    registry.add_discounts(&discounts())?;
    Ok(())
}
