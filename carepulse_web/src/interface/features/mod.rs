mod appointments;
mod billing;
mod insights;
mod records;

pub use self::{
    appointments::AppointmentFeatures, billing::BillingFeatures, insights::ClinicInsights,
    records::PatientRecords,
};
