//! Reusable UI components shared by the pages.

pub mod add_test_result_modal;
pub mod edit_patient_modal;
pub mod hospital_form;
pub mod hospital_list;
pub mod navbar;
pub mod patient_details;
pub mod patient_form;
