use crate::{
    commands::{Commands, ContactArgs, RegisterArgs},
    error::{CliError, Result as CliResult},
    quote_commands::{QuoteArgs, QuoteCommands},
};

use chrono::NaiveDate;
use hs_core::{
    CargoType, ContactInquiry, Identity, InquiryType, QuoteRequest, RegistrationRequest,
    ServiceType,
};
use hs_session::{GateDecision, KeyValueStore, Route, SessionManager, access_gate};
use log::info;
use serde_json::{Value, json};

/// Runs one CLI command against a session manager.
pub struct App<S: KeyValueStore> {
    manager: SessionManager<S>,
}

impl<S: KeyValueStore> App<S> {
    pub fn new(manager: SessionManager<S>) -> Self {
        Self { manager }
    }

    pub fn manager(&self) -> &SessionManager<S> {
        &self.manager
    }

    /// Resolve the stored session, then run `command`.
    ///
    /// Commands that need a signed-in user go through the access gate first.
    pub async fn execute(&self, command: Commands) -> CliResult<Value> {
        self.manager.resolve().await;

        match command {
            Commands::Login {
                email,
                password,
                demo,
            } => {
                let identity = match (demo, email, password) {
                    (Some(account), _, _) => self.manager.login_demo(account).await?,
                    (None, Some(email), Some(password)) => {
                        self.manager.login(&email, &password).await?
                    }
                    _ => return Err(CliError::input("email and password are required")),
                };
                Self::signed_in(identity)
            }
            Commands::Register(args) => {
                let identity = self.manager.register(&registration(args)).await?;
                Self::signed_in(identity)
            }
            Commands::GoogleLogin { token } => {
                let identity = self.manager.login_with_external_token(&token).await?;
                Self::signed_in(identity)
            }
            Commands::Logout => {
                let route = self.manager.logout().await?;
                Ok(json!({ "route": route.path() }))
            }
            Commands::Whoami => {
                let identity = self.require_identity()?;
                Ok(serde_json::to_value(identity)?)
            }
            Commands::Quote { action } => self.quote(action).await,
            Commands::Track { tracking_number } => {
                self.require_identity()?;
                let tracking_number = tracking_number.trim();
                if tracking_number.is_empty() {
                    return Err(CliError::input("tracking number is required"));
                }
                let token = self.manager.access_token().await;
                let shipment = self
                    .manager
                    .api()
                    .track_shipment(token.as_deref(), tracking_number)
                    .await
                    .map_err(CliError::track)?;
                Ok(serde_json::to_value(shipment)?)
            }
            Commands::Shipments => {
                self.require_identity()?;
                let token = self.manager.access_token().await;
                let shipments = self.manager.api().user_shipments(token.as_deref()).await?;
                Ok(serde_json::to_value(shipments)?)
            }
            Commands::Contact(args) => {
                let inquiry = contact_inquiry(args)?;
                inquiry.validate()?;
                let receipt = self.manager.api().submit_contact(&inquiry).await?;
                Ok(serde_json::to_value(receipt)?)
            }
            Commands::Stats => {
                let stats = self.manager.api().company_stats().await?;
                Ok(serde_json::to_value(stats)?)
            }
        }
    }

    async fn quote(&self, action: QuoteCommands) -> CliResult<Value> {
        let identity = self.require_identity()?;
        let token = self.manager.access_token().await;

        match action {
            QuoteCommands::Submit(args) => {
                let request = quote_request(args, &identity)?;
                request.validate()?;
                let receipt = self
                    .manager
                    .api()
                    .submit_quote(token.as_deref(), &request)
                    .await
                    .map_err(CliError::quote)?;
                info!("Quote {} submitted", receipt.quote_number);
                Ok(serde_json::to_value(receipt)?)
            }
            QuoteCommands::Status { quote_number } => {
                let record = self
                    .manager
                    .api()
                    .quote_status(token.as_deref(), quote_number.trim())
                    .await?;
                Ok(serde_json::to_value(record)?)
            }
            QuoteCommands::List => {
                let quotes = self.manager.api().user_quotes(token.as_deref()).await?;
                Ok(serde_json::to_value(quotes)?)
            }
        }
    }

    fn require_identity(&self) -> CliResult<Identity> {
        match access_gate::evaluate(&self.manager.snapshot()) {
            GateDecision::Render(identity) => Ok(identity),
            GateDecision::Redirect(route) => Err(CliError::sign_in_required(route)),
            GateDecision::Loading => Err(CliError::sign_in_required(Route::Login)),
        }
    }

    fn signed_in(identity: Identity) -> CliResult<Value> {
        Ok(json!({
            "user": serde_json::to_value(identity)?,
            "route": Route::Profile.path(),
        }))
    }
}

fn registration(args: RegisterArgs) -> RegistrationRequest {
    RegistrationRequest {
        username: args.username,
        email: args.email,
        first_name: args.first_name,
        last_name: args.last_name,
        phone: args.phone,
        company: args.company,
        password: args.password,
        password_confirm: args.password_confirm,
    }
}

/// Build the quote form, filling contact fields from the profile.
pub(crate) fn quote_request(args: QuoteArgs, identity: &Identity) -> CliResult<QuoteRequest> {
    let service_type: ServiceType = args.service_type.parse()?;
    let cargo_type: CargoType = args.cargo_type.parse()?;
    let preferred_shipping_date = NaiveDate::parse_from_str(args.date.trim(), "%Y-%m-%d")
        .map_err(|_| {
            CliError::input(format!("invalid date '{}', expected YYYY-MM-DD", args.date))
        })?;

    Ok(QuoteRequest {
        service_type,
        origin_port: args.origin,
        destination_port: args.destination,
        cargo_type,
        weight: QuoteRequest::parse_weight(&args.weight),
        dimensions: args.dimensions,
        estimated_value: QuoteRequest::parse_estimated_value(&args.estimated_value),
        preferred_shipping_date,
        special_requirements: args.special_requirements,
        company_name: args
            .company
            .or_else(|| identity.company.clone())
            .unwrap_or_default(),
        contact_name: args
            .contact_name
            .unwrap_or_else(|| identity.display_name()),
        email: args.email.unwrap_or_else(|| identity.email.clone()),
        phone: args
            .phone
            .or_else(|| identity.phone.clone())
            .unwrap_or_default(),
        cargo_description: args.description,
    })
}

pub(crate) fn contact_inquiry(args: ContactArgs) -> CliResult<ContactInquiry> {
    let inquiry_type: InquiryType = args.inquiry_type.parse()?;
    Ok(ContactInquiry {
        name: args.name,
        email: args.email,
        phone: args.phone,
        company: args.company,
        inquiry_type,
        subject: args.subject,
        message: args.message,
    })
}
