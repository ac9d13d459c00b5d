mod home;
pub use home::Home;

mod cafes;
pub use cafes::CafeList;

mod cafe_form;
pub use cafe_form::{AddCafe, EditCafe};

mod employees;
pub use employees::EmployeeList;

mod employee_form;
pub use employee_form::{AddEmployee, EditEmployee};

mod by_cafe;
pub use by_cafe::EmployeesByCafe;
