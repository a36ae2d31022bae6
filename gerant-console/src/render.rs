//! Plain-text rendering of console screens

use chrono::{DateTime, Utc};
use gerant_client::ConsoleLayout;
use shared::{Dish, HealthAlert, Ingredient, Promotion, Reservation, Staff};

pub fn header(layout: &ConsoleLayout, count: usize) -> String {
    let title = format!("{} ({count})", layout.screen);
    let rule = "-".repeat(usize::from(layout.sidebar_width / 8).max(title.len()));
    format!("{title}\n{rule}")
}

pub fn health_alert(alert: &HealthAlert) -> String {
    if alert.description.is_empty() {
        format!("#{:<5} {}", alert.id, alert.name)
    } else {
        format!("#{:<5} {} - {}", alert.id, alert.name, alert.description)
    }
}

pub fn dish(dish: &Dish) -> String {
    let rating = dish
        .rating
        .map(|r| format!("  {r:.1}/5"))
        .unwrap_or_default();
    format!(
        "#{:<5} {:<24} {:>10}  {} kcal  [{}]  {} orders{rating}",
        dish.id,
        dish.name,
        dish.price_label(),
        dish.calories,
        dish.category,
        dish.orders
    )
}

pub fn ingredient(ingredient: &Ingredient) -> String {
    format!(
        "#{:<5} {:<24} {:>6}  {}",
        ingredient.id,
        ingredient.name,
        ingredient.quantity,
        ingredient.category_label()
    )
}

pub fn promotion(promotion: &Promotion) -> String {
    let dishes = if promotion.dish_ids.is_empty() {
        String::new()
    } else {
        let ids: Vec<String> = promotion.dish_ids.iter().map(ToString::to_string).collect();
        format!("  dishes: {}", ids.join(", "))
    };
    format!(
        "{:<16} {:<8} {}{dishes}",
        promotion.display_name(),
        promotion.discount_label(),
        promotion.period_label()
    )
}

pub fn staff(member: &Staff) -> String {
    let tables = if member.table_ids.is_empty() {
        "-".to_string()
    } else {
        member
            .table_ids
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!(
        "#{:<5} {:<24} {:<12} {}  tables: {tables}",
        member.id,
        member.full_name(),
        member.job_title,
        member.email
    )
}

pub fn reservation(reservation: &Reservation, now: DateTime<Utc>) -> String {
    let window = match (reservation.start, reservation.end) {
        (Some(start), Some(end)) => format!(
            "{} - {}",
            start.format("%d %b %Y, %H:%M"),
            end.format("%H:%M")
        ),
        _ => "no time window".to_string(),
    };
    let duration = reservation
        .duration_label()
        .map(|d| format!(" ({d})"))
        .unwrap_or_default();
    format!(
        "#{:<5} {:<10} table {:<3} {} guests  client #{}  {window}{duration}",
        reservation.id,
        reservation.status_at(now).label(),
        reservation.table_id,
        reservation.person_count,
        reservation.client_id
    )
}
