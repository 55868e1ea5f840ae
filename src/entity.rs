//! Core records of the marketplace: breeding houses, dogs, and discounts

#[derive(minicbor::Encode, minicbor::Decode, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    #[n(0)]
    Male,
    #[n(1)]
    Female,
}

/// A breeding house: an account that holds a currency balance and owns dogs.
///
/// Balances are signed. Validation keeps purchases from driving a balance
/// negative, but mating fees are charged without a funds check, so a balance
/// below zero is a legal state.
#[derive(minicbor::Encode, minicbor::Decode, Debug, Clone, PartialEq, Eq)]
pub struct House {
    #[n(0)]
    pub id: String,
    #[n(1)]
    pub name: String,
    #[n(2)]
    pub address: String,
    #[n(3)]
    pub phone: String,
    #[n(4)]
    pub email: String,
    #[n(5)]
    pub balance: i64,
}

/// A registered dog. The owner and lineage fields are house/dog ids resolved
/// through the registry, never embedded records. Lineage links are set at
/// creation and can form cycles in bad data; nothing here walks them.
#[derive(minicbor::Encode, minicbor::Decode, Debug, Clone, PartialEq, Eq)]
pub struct Dog {
    #[n(0)]
    pub id: String,
    #[n(1)]
    pub name: String,
    #[n(2)]
    pub breed: String,
    #[n(3)]
    pub gender: Gender,
    #[n(4)]
    pub price: u64,
    #[n(5)]
    pub mate_price: u64,
    #[n(6)]
    pub for_sale: bool,
    #[n(7)]
    pub for_mate: bool,
    #[n(8)]
    pub owner: String,
    #[n(9)]
    pub father: Option<String>,
    #[n(10)]
    pub mother: Option<String>,
    #[n(11)]
    pub info: String,
    #[n(12)]
    pub photo_url: String,
}

/// A fixed-amount price reduction for one buyer/seller pair, in either role.
/// Read-only input to pricing; the engine never mutates discounts.
#[derive(minicbor::Encode, minicbor::Decode, Debug, Clone, PartialEq, Eq)]
pub struct Discount {
    #[n(0)]
    pub id: String,
    #[n(1)]
    pub buyer: String,
    #[n(2)]
    pub seller: String,
    #[n(3)]
    pub amount: u64,
}

impl House {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            address: String::new(),
            phone: String::new(),
            email: String::new(),
            balance: 0,
        }
    }
    pub fn set_address(mut self, address: &str) -> Self {
        self.address = address.to_string();
        self
    }
    pub fn set_phone(mut self, phone: &str) -> Self {
        self.phone = phone.to_string();
        self
    }
    pub fn set_email(mut self, email: &str) -> Self {
        self.email = email.to_string();
        self
    }
    pub fn set_balance(mut self, balance: i64) -> Self {
        self.balance = balance;
        self
    }
}

impl Dog {
    pub fn new(id: &str, name: &str, gender: Gender, owner: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            breed: String::new(),
            gender,
            price: 0,
            mate_price: 0,
            for_sale: false,
            for_mate: false,
            owner: owner.to_string(),
            father: None,
            mother: None,
            info: String::new(),
            photo_url: String::new(),
        }
    }
    pub fn set_breed(mut self, breed: &str) -> Self {
        self.breed = breed.to_string();
        self
    }
    pub fn set_price(mut self, price: u64) -> Self {
        self.price = price;
        self
    }
    pub fn set_mate_price(mut self, mate_price: u64) -> Self {
        self.mate_price = mate_price;
        self
    }
    pub fn set_for_sale(mut self, for_sale: bool) -> Self {
        self.for_sale = for_sale;
        self
    }
    pub fn set_for_mate(mut self, for_mate: bool) -> Self {
        self.for_mate = for_mate;
        self
    }
    pub fn set_father(mut self, father: &str) -> Self {
        self.father = Some(father.to_string());
        self
    }
    pub fn set_mother(mut self, mother: &str) -> Self {
        self.mother = Some(mother.to_string());
        self
    }
    pub fn set_info(mut self, info: &str) -> Self {
        self.info = info.to_string();
        self
    }
    pub fn set_photo_url(mut self, photo_url: &str) -> Self {
        self.photo_url = photo_url.to_string();
        self
    }
}

impl Discount {
    pub fn new(id: &str, buyer: &str, seller: &str, amount: u64) -> Self {
        Self {
            id: id.to_string(),
            buyer: buyer.to_string(),
            seller: seller.to_string(),
            amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dog_encoding() {
        let original = Dog::new("D_77", "Rex", Gender::Male, "BH_1")
            .set_breed("Husky")
            .set_price(2000)
            .set_mate_price(500)
            .set_for_sale(true)
            .set_father("D_2")
            .set_mother("D_5");

        let encoding = minicbor::to_vec(&original).unwrap();
        let decode: Dog = minicbor::decode(&encoding).unwrap();

        assert_eq!(original, decode);
    }

    #[test]
    fn house_encoding() {
        let original = House::new("BH_9", "North Kennel")
            .set_address("Somewhere 12")
            .set_balance(-340);

        let encoding = minicbor::to_vec(&original).unwrap();
        let decode: House = minicbor::decode(&encoding).unwrap();

        assert_eq!(original, decode);
    }
}
