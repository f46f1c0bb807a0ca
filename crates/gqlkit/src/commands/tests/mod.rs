mod explain_tests;
mod propagation_tests;
