mod comparison_properties;
mod grouping_properties;
