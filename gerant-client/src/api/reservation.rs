//! Reservation API (`/reservation`), read-only

use async_trait::async_trait;
use shared::{RecordId, Reservation};

use crate::error::ClientResult;
use crate::http::{HttpClient, NetworkHttpClient};
use crate::resource::{ListResource, fetch_list, fetch_one};

const PATH: &str = "reservation";

pub struct ReservationApi<H: HttpClient = NetworkHttpClient> {
    http: H,
}

impl<H: HttpClient> ReservationApi<H> {
    pub fn new(http: H) -> Self {
        Self { http }
    }
}

#[async_trait]
impl<H: HttpClient + 'static> ListResource for ReservationApi<H> {
    type Record = Reservation;

    const NAME: &'static str = "reservation";

    async fn list(&self) -> ClientResult<Vec<Reservation>> {
        fetch_list(&self.http, Self::NAME, PATH, "reservation").await
    }

    async fn get(&self, id: RecordId) -> ClientResult<Reservation> {
        fetch_one(&self.http, &format!("{PATH}/{id}"), "reservation").await
    }
}
