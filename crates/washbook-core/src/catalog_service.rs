//! Service-catalog maintenance, one template set per customer category.

use washbook_domain::{CustomerType, ServiceTemplate, Workbook};

use crate::error::CoreError;

/// Write-path operations for the price catalog.
pub struct CatalogService;

impl CatalogService {
    pub fn templates(workbook: &Workbook, customer_type: CustomerType) -> &[ServiceTemplate] {
        workbook.service_sets.templates(customer_type)
    }

    /// Adds a template after checking the name is unique within its
    /// category and the price is not negative.
    pub fn add_template(
        workbook: &mut Workbook,
        customer_type: CustomerType,
        template: ServiceTemplate,
    ) -> Result<(), CoreError> {
        if template.name.trim().is_empty() {
            return Err(CoreError::Validation("Service name is required".into()));
        }
        if template.price < 0.0 {
            return Err(CoreError::Validation(
                "Service price cannot be negative".into(),
            ));
        }
        let templates = Self::templates_mut(workbook, customer_type)?;
        let normalized = template.name.trim().to_ascii_lowercase();
        if templates
            .iter()
            .any(|existing| existing.name.trim().to_ascii_lowercase() == normalized)
        {
            return Err(CoreError::Validation(format!(
                "Service `{}` already exists for {}",
                template.name, customer_type
            )));
        }
        templates.push(template);
        workbook.touch();
        Ok(())
    }

    pub fn remove_template(
        workbook: &mut Workbook,
        customer_type: CustomerType,
        name: &str,
    ) -> Result<(), CoreError> {
        let templates = Self::templates_mut(workbook, customer_type)?;
        let before = templates.len();
        templates.retain(|template| template.name != name);
        if Self::templates(workbook, customer_type).len() == before {
            return Err(CoreError::Validation(format!(
                "Service `{}` not found for {}",
                name, customer_type
            )));
        }
        workbook.touch();
        Ok(())
    }

    /// Settings-screen bulk overwrite of a category's template set.
    pub fn replace(
        workbook: &mut Workbook,
        customer_type: CustomerType,
        templates: Vec<ServiceTemplate>,
    ) -> Result<(), CoreError> {
        let slot = Self::templates_mut(workbook, customer_type)?;
        *slot = templates;
        workbook.touch();
        Ok(())
    }

    fn templates_mut(
        workbook: &mut Workbook,
        customer_type: CustomerType,
    ) -> Result<&mut Vec<ServiceTemplate>, CoreError> {
        workbook
            .service_sets
            .templates_mut(customer_type)
            .ok_or_else(|| {
                CoreError::InvalidOperation("Unknown customer type has no catalog".into())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_rejects_duplicate_names_within_a_category() {
        let mut workbook = Workbook::new("Test");
        CatalogService::add_template(
            &mut workbook,
            CustomerType::Customer,
            ServiceTemplate::new("Wash", 250.0),
        )
        .expect("first add succeeds");

        let err = CatalogService::add_template(
            &mut workbook,
            CustomerType::Customer,
            ServiceTemplate::new("wash", 300.0),
        )
        .expect_err("duplicate must fail");
        assert!(matches!(err, CoreError::Validation(_)));

        // Same name in another category is fine.
        CatalogService::add_template(
            &mut workbook,
            CustomerType::Dealer,
            ServiceTemplate::new("Wash", 200.0),
        )
        .expect("other category succeeds");
    }

    #[test]
    fn add_rejects_negative_price() {
        let mut workbook = Workbook::new("Test");
        let err = CatalogService::add_template(
            &mut workbook,
            CustomerType::Customer,
            ServiceTemplate::new("Wash", -1.0),
        )
        .expect_err("must fail");
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn replace_overwrites_a_category_set() {
        let mut workbook = Workbook::new("Test");
        CatalogService::add_template(
            &mut workbook,
            CustomerType::Dealer,
            ServiceTemplate::new("Wash", 200.0),
        )
        .unwrap();

        CatalogService::replace(
            &mut workbook,
            CustomerType::Dealer,
            vec![
                ServiceTemplate::new("Foam Wash", 300.0),
                ServiceTemplate::new("Polish", 450.0),
            ],
        )
        .unwrap();

        let names: Vec<&str> = CatalogService::templates(&workbook, CustomerType::Dealer)
            .iter()
            .map(|template| template.name.as_str())
            .collect();
        assert_eq!(names, ["Foam Wash", "Polish"]);
    }

    #[test]
    fn unknown_category_has_no_catalog() {
        let mut workbook = Workbook::new("Test");
        let err = CatalogService::add_template(
            &mut workbook,
            CustomerType::Unknown,
            ServiceTemplate::new("Wash", 100.0),
        )
        .expect_err("must fail");
        assert!(matches!(err, CoreError::InvalidOperation(_)));
        assert!(CatalogService::templates(&workbook, CustomerType::Unknown).is_empty());
    }
}
