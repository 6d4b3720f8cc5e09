// SPDX-License-Identifier: MPL-2.0
//! Form state and required-field gates.
//!
//! Forms only check that required fields are filled in; a field holding
//! nothing but whitespace counts as empty. What happens after a successful
//! or failed check is decided by [`crate::portal::Portal`].

use crate::session::Role;
use std::fmt;

/// Identifies a form in validation errors and log entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Login,
    Registration,
    Donation,
    SupplyRequest,
    Allocation,
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormKind::Login => "login",
            FormKind::Registration => "registration",
            FormKind::Donation => "donation",
            FormKind::SupplyRequest => "supply request",
            FormKind::Allocation => "allocation",
        };
        f.write_str(name)
    }
}

/// Required fields left empty on submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormError {
    pub form: FormKind,
    pub missing: Vec<&'static str>,
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: missing required field(s) {}",
            self.form,
            self.missing.join(", ")
        )
    }
}

impl std::error::Error for FormError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupplyCategory {
    Medications,
    ProtectiveEquipment,
    MedicalEquipment,
    Consumables,
    Diagnostics,
}

impl SupplyCategory {
    pub const ALL: [SupplyCategory; 5] = [
        SupplyCategory::Medications,
        SupplyCategory::ProtectiveEquipment,
        SupplyCategory::MedicalEquipment,
        SupplyCategory::Consumables,
        SupplyCategory::Diagnostics,
    ];

    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            SupplyCategory::Medications => "category-medications",
            SupplyCategory::ProtectiveEquipment => "category-ppe",
            SupplyCategory::MedicalEquipment => "category-equipment",
            SupplyCategory::Consumables => "category-consumables",
            SupplyCategory::Diagnostics => "category-diagnostics",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemCondition {
    New,
    Unopened,
    Used,
}

impl ItemCondition {
    pub const ALL: [ItemCondition; 3] =
        [ItemCondition::New, ItemCondition::Unopened, ItemCondition::Used];

    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            ItemCondition::New => "condition-new",
            ItemCondition::Unopened => "condition-unopened",
            ItemCondition::Used => "condition-used",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Critical,
    ];

    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Priority::Low => "priority-low",
            Priority::Medium => "priority-medium",
            Priority::High => "priority-high",
            Priority::Critical => "priority-critical",
        }
    }
}

fn require_text(missing: &mut Vec<&'static str>, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        missing.push(field);
    }
}

fn require_choice<T>(missing: &mut Vec<&'static str>, field: &'static str, value: Option<T>) {
    if value.is_none() {
        missing.push(field);
    }
}

fn check(form: FormKind, missing: Vec<&'static str>) -> Result<(), FormError> {
    if missing.is_empty() {
        Ok(())
    } else {
        Err(FormError { form, missing })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), FormError> {
        let mut missing = Vec::new();
        require_text(&mut missing, "email", &self.email);
        require_text(&mut missing, "password", &self.password);
        check(FormKind::Login, missing)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub role: Option<Role>,
}

impl RegistrationForm {
    /// Returns the chosen role when every required field is present.
    pub fn validate(&self) -> Result<Role, FormError> {
        let mut missing = Vec::new();
        require_text(&mut missing, "name", &self.name);
        require_text(&mut missing, "email", &self.email);
        require_text(&mut missing, "phone", &self.phone);
        require_text(&mut missing, "password", &self.password);
        require_choice(&mut missing, "role", self.role);
        match self.role {
            Some(role) if missing.is_empty() => Ok(role),
            _ => Err(FormError {
                form: FormKind::Registration,
                missing,
            }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DonationForm {
    pub name: String,
    pub category: Option<SupplyCategory>,
    pub quantity: String,
    pub unit: String,
    pub location: String,
    pub expiry: String,
    pub condition: Option<ItemCondition>,
    pub notes: String,
}

impl DonationForm {
    pub fn validate(&self) -> Result<(), FormError> {
        let mut missing = Vec::new();
        require_text(&mut missing, "name", &self.name);
        require_choice(&mut missing, "category", self.category);
        require_text(&mut missing, "quantity", &self.quantity);
        require_text(&mut missing, "location", &self.location);
        require_choice(&mut missing, "condition", self.condition);
        check(FormKind::Donation, missing)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupplyRequestForm {
    pub name: String,
    pub category: Option<SupplyCategory>,
    pub quantity: String,
    pub priority: Option<Priority>,
    pub department: String,
    pub reason: String,
    pub contact: String,
}

impl SupplyRequestForm {
    pub fn validate(&self) -> Result<(), FormError> {
        let mut missing = Vec::new();
        require_text(&mut missing, "name", &self.name);
        require_choice(&mut missing, "category", self.category);
        require_text(&mut missing, "quantity", &self.quantity);
        require_choice(&mut missing, "priority", self.priority);
        require_text(&mut missing, "department", &self.department);
        require_text(&mut missing, "reason", &self.reason);
        require_text(&mut missing, "contact", &self.contact);
        check(FormKind::SupplyRequest, missing)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllocationForm {
    pub facility: String,
    pub quantity: String,
    pub notes: String,
}

impl AllocationForm {
    pub fn validate(&self) -> Result<(), FormError> {
        let mut missing = Vec::new();
        require_text(&mut missing, "facility", &self.facility);
        require_text(&mut missing, "quantity", &self.quantity);
        check(FormKind::Allocation, missing)
    }
}

/// A single field edit coming from the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    LoginEmail(String),
    LoginPassword(String),
    RegisterName(String),
    RegisterEmail(String),
    RegisterPhone(String),
    RegisterPassword(String),
    RegisterRole(Role),
    DonationName(String),
    DonationCategory(SupplyCategory),
    DonationQuantity(String),
    DonationUnit(String),
    DonationLocation(String),
    DonationExpiry(String),
    DonationCondition(ItemCondition),
    DonationNotes(String),
    RequestName(String),
    RequestCategory(SupplyCategory),
    RequestQuantity(String),
    RequestPriority(Priority),
    RequestDepartment(String),
    RequestReason(String),
    RequestContact(String),
    AllocateFacility(String),
    AllocateQuantity(String),
    AllocateNotes(String),
}

/// State of every form in the portal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Forms {
    pub login: LoginForm,
    pub registration: RegistrationForm,
    pub donation: DonationForm,
    pub supply_request: SupplyRequestForm,
    pub allocation: AllocationForm,
}

impl Forms {
    pub fn apply(&mut self, edit: Edit) {
        match edit {
            Edit::LoginEmail(v) => self.login.email = v,
            Edit::LoginPassword(v) => self.login.password = v,
            Edit::RegisterName(v) => self.registration.name = v,
            Edit::RegisterEmail(v) => self.registration.email = v,
            Edit::RegisterPhone(v) => self.registration.phone = v,
            Edit::RegisterPassword(v) => self.registration.password = v,
            Edit::RegisterRole(role) => self.registration.role = Some(role),
            Edit::DonationName(v) => self.donation.name = v,
            Edit::DonationCategory(c) => self.donation.category = Some(c),
            Edit::DonationQuantity(v) => self.donation.quantity = v,
            Edit::DonationUnit(v) => self.donation.unit = v,
            Edit::DonationLocation(v) => self.donation.location = v,
            Edit::DonationExpiry(v) => self.donation.expiry = v,
            Edit::DonationCondition(c) => self.donation.condition = Some(c),
            Edit::DonationNotes(v) => self.donation.notes = v,
            Edit::RequestName(v) => self.supply_request.name = v,
            Edit::RequestCategory(c) => self.supply_request.category = Some(c),
            Edit::RequestQuantity(v) => self.supply_request.quantity = v,
            Edit::RequestPriority(p) => self.supply_request.priority = Some(p),
            Edit::RequestDepartment(v) => self.supply_request.department = v,
            Edit::RequestReason(v) => self.supply_request.reason = v,
            Edit::RequestContact(v) => self.supply_request.contact = v,
            Edit::AllocateFacility(v) => self.allocation.facility = v,
            Edit::AllocateQuantity(v) => self.allocation.quantity = v,
            Edit::AllocateNotes(v) => self.allocation.notes = v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_donation() -> DonationForm {
        DonationForm {
            name: "Surgical masks".into(),
            category: Some(SupplyCategory::ProtectiveEquipment),
            quantity: "500".into(),
            location: "Lyon".into(),
            condition: Some(ItemCondition::New),
            ..DonationForm::default()
        }
    }

    #[test]
    fn empty_login_reports_both_fields() {
        let err = LoginForm::default().validate().unwrap_err();
        assert_eq!(err.form, FormKind::Login);
        assert_eq!(err.missing, vec!["email", "password"]);
    }

    #[test]
    fn whitespace_counts_as_empty() {
        let form = LoginForm {
            email: "a@b.c".into(),
            password: "   ".into(),
        };
        assert_eq!(form.validate().unwrap_err().missing, vec!["password"]);
    }

    #[test]
    fn registration_returns_selected_role() {
        let form = RegistrationForm {
            name: "Ada".into(),
            email: "ada@example.org".into(),
            phone: "0102030405".into(),
            password: "secret".into(),
            role: Some(Role::Facility),
        };
        assert_eq!(form.validate(), Ok(Role::Facility));
    }

    #[test]
    fn registration_without_role_fails() {
        let form = RegistrationForm {
            name: "Ada".into(),
            email: "ada@example.org".into(),
            phone: "0102030405".into(),
            password: "secret".into(),
            role: None,
        };
        assert_eq!(form.validate().unwrap_err().missing, vec!["role"]);
    }

    #[test]
    fn registration_with_role_reports_only_missing_text_fields() {
        let form = RegistrationForm {
            name: "Ada".into(),
            role: Some(Role::Donor),
            ..RegistrationForm::default()
        };
        let err = form.validate().unwrap_err();
        assert_eq!(err.form, FormKind::Registration);
        assert_eq!(err.missing, vec!["email", "phone", "password"]);
    }

    #[test]
    fn donation_optional_fields_may_stay_empty() {
        assert!(filled_donation().validate().is_ok());
    }

    #[test]
    fn donation_requires_condition() {
        let form = DonationForm {
            condition: None,
            ..filled_donation()
        };
        assert_eq!(form.validate().unwrap_err().missing, vec!["condition"]);
    }

    #[test]
    fn supply_request_lists_every_missing_field() {
        let err = SupplyRequestForm::default().validate().unwrap_err();
        assert_eq!(
            err.missing,
            vec![
                "name",
                "category",
                "quantity",
                "priority",
                "department",
                "reason",
                "contact"
            ]
        );
    }

    #[test]
    fn allocation_needs_facility_and_quantity() {
        let form = AllocationForm {
            facility: "Hôpital Nord".into(),
            quantity: String::new(),
            notes: "urgent".into(),
        };
        assert_eq!(form.validate().unwrap_err().missing, vec!["quantity"]);
    }

    #[test]
    fn form_error_display_names_form_and_fields() {
        let err = FormError {
            form: FormKind::SupplyRequest,
            missing: vec!["reason", "contact"],
        };
        assert_eq!(
            err.to_string(),
            "supply request: missing required field(s) reason, contact"
        );
    }

    #[test]
    fn edits_update_the_matching_form() {
        let mut forms = Forms::default();
        forms.apply(Edit::RegisterRole(Role::Ngo));
        forms.apply(Edit::RequestPriority(Priority::High));
        forms.apply(Edit::AllocateQuantity("12".into()));

        assert_eq!(forms.registration.role, Some(Role::Ngo));
        assert_eq!(forms.supply_request.priority, Some(Priority::High));
        assert_eq!(forms.allocation.quantity, "12");
        assert_eq!(forms.login, LoginForm::default());
    }
}
