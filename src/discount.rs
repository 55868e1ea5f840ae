use crate::entity::Discount;

/// Reduce `price` by the discount amount when the discount is eligible for
/// this payer/payee pair.
///
/// Eligibility is bidirectional: the discount's declared buyer/seller pair
/// must equal `{payer, payee}` as an unordered pair, compared by house id.
/// A discount larger than the price is ignored outright, never clamped and
/// never an error. Pure and deterministic.
pub fn effective_price(discount: Option<&Discount>, payer: &str, payee: &str, price: u64) -> u64 {
    let Some(discount) = discount else {
        return price;
    };

    let pair_matches = (discount.buyer == payer && discount.seller == payee)
        || (discount.buyer == payee && discount.seller == payer);

    if pair_matches && discount.amount <= price {
        price - discount.amount
    } else {
        price
    }
}
