//! Command handlers, one per console screen

use anyhow::Context as _;
use chrono::Utc;
use gerant_client::{
    ConsoleContext, GerantClient, LayoutChange, ListController, ListResource, Screen,
};
use shared::{
    DishForm, HealthAlertForm, IngredientForm, Password, PriceChange, PromotionForm,
    StaffForm, StockAdjustment, TableAssignment,
};

use crate::cli::{
    AlertCommand, DishCommand, PromotionArgs, PromotionCommand, ReservationCommand,
    SearchArgs, StaffCommand, StockCommand,
};
use crate::render;

pub struct Console {
    client: GerantClient,
    context: ConsoleContext,
}

impl Console {
    pub fn new(client: GerantClient) -> Self {
        Self {
            client,
            context: ConsoleContext::new(),
        }
    }

    fn open(&self, screen: Screen) {
        self.context.update(LayoutChange::Navigate(screen));
    }

    /// Refresh, filter and print a collection
    async fn print_list<R: ListResource>(
        &self,
        controller: &ListController<R>,
        search: SearchArgs,
        line: impl Fn(&R::Record) -> String,
    ) -> anyhow::Result<()> {
        controller.refresh().await?;
        if let Some(text) = search.search {
            controller.set_search_text(text).await;
        }
        let items = controller.filtered_items().await;
        println!("{}", render::header(&self.context.layout(), items.len()));
        for item in &items {
            println!("{}", line(item));
        }
        Ok(())
    }

    pub async fn alerts(&self, command: AlertCommand) -> anyhow::Result<()> {
        self.open(Screen::HealthAlerts);
        let controller = ListController::new(self.client.health_alerts());
        match command {
            AlertCommand::List(search) => {
                self.print_list(&controller, search, render::health_alert).await?
            }
            AlertCommand::Add { name, description } => {
                let created = controller
                    .create(&HealthAlertForm::new(name, description))
                    .await?;
                println!("Added {}", render::health_alert(&created));
            }
            AlertCommand::Delete { id } => {
                delete_reported(controller.delete(id).await, "Health alert", id)?;
            }
        }
        stale_hint(&controller).await;
        Ok(())
    }

    pub async fn dishes(&self, command: DishCommand) -> anyhow::Result<()> {
        self.open(Screen::Menu);
        let controller = ListController::new(self.client.dishes());
        match command {
            DishCommand::List(search) => self.print_list(&controller, search, render::dish).await?,
            DishCommand::Show { id } => {
                let api = controller.resource();
                let dish = api.get(id).await.with_context(|| format!("Dish #{id}"))?;
                println!("{}", render::dish(&dish));
                if !dish.description.is_empty() {
                    println!("  {}", dish.description);
                }
                let (ingredients, alerts) = tokio::try_join!(api.ingredients(id), api.health_alerts(id))?;
                println!("  Ingredients:");
                for ingredient in &ingredients {
                    println!("    {}", render::ingredient(ingredient));
                }
                println!("  Health alerts:");
                for alert in &alerts {
                    println!("    {}", render::health_alert(alert));
                }
            }
            DishCommand::Add(args) => {
                let form = DishForm {
                    name: args.name,
                    description: args.description,
                    price: args.price,
                    calories: args.calories,
                    category: args.category,
                    image: args.image,
                    date: args.date,
                    ingredients: args.ingredients,
                    health_alerts: args.health_alerts,
                };
                controller.create(&form).await?;
                println!("Added dish {:?}", form.name.trim());
            }
            DishCommand::Price { id, price } => {
                controller.update(id, &PriceChange::new(price)).await?;
                if let Some(dish) = controller.items().await.iter().find(|d| d.id == id) {
                    println!("{}", render::dish(dish));
                }
            }
            DishCommand::Delete { id } => {
                delete_reported(controller.delete(id).await, "Dish", id)?;
            }
            DishCommand::AddIngredient {
                dish,
                ingredient,
                quantity,
            } => {
                controller
                    .resource()
                    .add_ingredient(dish, ingredient, quantity)
                    .await?;
                println!("Ingredient #{ingredient} added to dish #{dish}");
            }
            DishCommand::SetIngredient {
                dish,
                ingredient,
                quantity,
            } => {
                controller
                    .resource()
                    .update_ingredient_quantity(dish, ingredient, quantity)
                    .await?;
                println!("Ingredient #{ingredient} on dish #{dish} set to {quantity}");
            }
            DishCommand::RemoveIngredient { dish, ingredient } => {
                controller
                    .resource()
                    .remove_ingredient(dish, ingredient)
                    .await?;
                println!("Ingredient #{ingredient} removed from dish #{dish}");
            }
        }
        stale_hint(&controller).await;
        Ok(())
    }

    pub async fn stock(&self, command: StockCommand) -> anyhow::Result<()> {
        self.open(Screen::Stock);
        let controller = ListController::new(self.client.ingredients());
        match command {
            StockCommand::List(search) => {
                self.print_list(&controller, search, render::ingredient).await?
            }
            StockCommand::Add { name, quantity } => {
                controller
                    .create(&IngredientForm::new(name.clone(), quantity))
                    .await?;
                println!("Added ingredient {:?}", name.trim());
            }
            StockCommand::Set { id, quantity } => {
                controller.update(id, &StockAdjustment::new(quantity)).await?;
                if let Some(ingredient) = controller.items().await.iter().find(|i| i.id == id) {
                    println!("{}", render::ingredient(ingredient));
                }
            }
            StockCommand::Delete { id } => {
                delete_reported(controller.delete(id).await, "Ingredient", id)?;
            }
        }
        stale_hint(&controller).await;
        Ok(())
    }

    pub async fn promotions(&self, command: PromotionCommand) -> anyhow::Result<()> {
        self.open(Screen::Promotions);
        let controller = ListController::new(self.client.promotions());
        match command {
            PromotionCommand::List(search) => {
                self.print_list(&controller, search, render::promotion).await?
            }
            PromotionCommand::Add { promotion, dishes } => {
                let created = controller
                    .resource()
                    .create_for_dishes(&promotion_form(promotion), &dishes)
                    .await?;
                println!("Added {}", render::promotion(&created));
            }
            PromotionCommand::Update { id, promotion } => {
                controller.update(id, &promotion_form(promotion)).await?;
                println!("Updated promotion #{id}");
            }
            PromotionCommand::Delete { id } => {
                delete_reported(controller.delete(id).await, "Promotion", id)?;
            }
        }
        stale_hint(&controller).await;
        Ok(())
    }

    pub async fn staff(&self, command: StaffCommand) -> anyhow::Result<()> {
        self.open(Screen::Staff);
        let controller = ListController::new(self.client.staff());
        match command {
            StaffCommand::List(search) => self.print_list(&controller, search, render::staff).await?,
            StaffCommand::Add(args) => {
                let form = StaffForm {
                    first_name: args.first_name,
                    last_name: args.last_name,
                    age: args.age,
                    job_title: args.job_title,
                    email: args.email,
                    phone: args.phone,
                    password: Password::new(args.password),
                    table_ids: args.tables,
                };
                controller.create(&form).await?;
                println!(
                    "Registered {} {}",
                    form.first_name.trim(),
                    form.last_name.trim()
                );
            }
            StaffCommand::AssignTable { id, table } => {
                controller.update(id, &TableAssignment::new(table)).await?;
                println!("Staff member #{id} now serves table #{table}");
            }
            StaffCommand::Delete { id } => {
                delete_reported(controller.delete(id).await, "Staff member", id)?;
            }
        }
        stale_hint(&controller).await;
        Ok(())
    }

    pub async fn reservations(&self, command: ReservationCommand) -> anyhow::Result<()> {
        self.open(Screen::Reservations);
        let controller = ListController::new(self.client.reservations());
        let now = Utc::now();
        match command {
            ReservationCommand::List { search, status } => {
                controller.refresh().await?;
                if let Some(text) = search.search {
                    controller.set_search_text(text).await;
                }
                let items = controller.filtered_by_status(status, now).await;
                println!("{}", render::header(&self.context.layout(), items.len()));
                for reservation in &items {
                    println!("{}", render::reservation(reservation, now));
                }
            }
            ReservationCommand::Show { id } => {
                let reservation = controller
                    .resource()
                    .get(id)
                    .await
                    .with_context(|| format!("Reservation #{id}"))?;
                println!("{}", render::reservation(&reservation, now));
            }
        }
        Ok(())
    }
}

async fn stale_hint<R: ListResource>(controller: &ListController<R>) {
    if controller.is_stale().await {
        eprintln!("Saved, but the list could not be reloaded; list it again to refresh");
    }
}

fn promotion_form(args: PromotionArgs) -> PromotionForm {
    PromotionForm::new(args.discount, args.start, args.end)
}

/// A 404 on delete means someone else already removed the record
fn delete_reported(
    result: gerant_client::ClientResult<()>,
    what: &str,
    id: shared::RecordId,
) -> anyhow::Result<()> {
    match result {
        Ok(()) => {
            println!("{what} #{id} deleted");
            Ok(())
        }
        Err(e) if e.is_not_found() => {
            println!("{what} #{id} was already removed");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
