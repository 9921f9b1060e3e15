//! Bundled employee directory. There is no backend endpoint for this
//! listing; the dataset ships with the app and is filtered client-side.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmployeeProfile {
    pub code: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub department: &'static str,
    pub position: &'static str,
    pub join_date: &'static str,
    pub status: &'static str,
}

pub const DIRECTORY: &[EmployeeProfile] = &[
    EmployeeProfile {
        code: "EMP001",
        name: "Sarah Johnson",
        email: "sarah.johnson@company.com",
        department: "Engineering",
        position: "Senior Software Engineer",
        join_date: "2021-03-15",
        status: "Active",
    },
    EmployeeProfile {
        code: "EMP002",
        name: "Michael Chen",
        email: "michael.chen@company.com",
        department: "Marketing",
        position: "Marketing Manager",
        join_date: "2020-08-22",
        status: "Active",
    },
    EmployeeProfile {
        code: "EMP003",
        name: "Emily Rodriguez",
        email: "emily.rodriguez@company.com",
        department: "Human Resources",
        position: "HR Specialist",
        join_date: "2022-01-10",
        status: "Active",
    },
    EmployeeProfile {
        code: "EMP004",
        name: "David Park",
        email: "david.park@company.com",
        department: "Sales",
        position: "Sales Representative",
        join_date: "2021-11-05",
        status: "Active",
    },
    EmployeeProfile {
        code: "EMP005",
        name: "Jessica Taylor",
        email: "jessica.taylor@company.com",
        department: "Engineering",
        position: "Frontend Developer",
        join_date: "2022-06-20",
        status: "Active",
    },
    EmployeeProfile {
        code: "EMP006",
        name: "Robert Williams",
        email: "robert.williams@company.com",
        department: "Finance",
        position: "Financial Analyst",
        join_date: "2020-05-12",
        status: "Active",
    },
    EmployeeProfile {
        code: "EMP007",
        name: "Amanda Lee",
        email: "amanda.lee@company.com",
        department: "Design",
        position: "UX Designer",
        join_date: "2021-09-18",
        status: "Active",
    },
    EmployeeProfile {
        code: "EMP008",
        name: "James Brown",
        email: "james.brown@company.com",
        department: "Operations",
        position: "Operations Manager",
        join_date: "2019-12-03",
        status: "Active",
    },
];

pub fn departments() -> Vec<&'static str> {
    let mut departments: Vec<_> = DIRECTORY.iter().map(|emp| emp.department).collect();
    departments.sort_unstable();
    departments.dedup();
    departments
}

/// Case-insensitive substring match on name, email, and code, optionally
/// narrowed to one department. An empty query matches everyone.
pub fn filter_directory(query: &str, department: Option<&str>) -> Vec<&'static EmployeeProfile> {
    let needle = query.trim().to_lowercase();
    DIRECTORY
        .iter()
        .filter(|emp| department.map_or(true, |dept| emp.department == dept))
        .filter(|emp| {
            needle.is_empty()
                || emp.name.to_lowercase().contains(&needle)
                || emp.email.to_lowercase().contains(&needle)
                || emp.code.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_lists_everyone() {
        assert_eq!(filter_directory("", None).len(), DIRECTORY.len());
    }

    #[test]
    fn query_matches_name_and_code_case_insensitively() {
        let by_name = filter_directory("sarah", None);
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].code, "EMP001");

        let by_code = filter_directory("emp007", None);
        assert_eq!(by_code.len(), 1);
        assert_eq!(by_code[0].name, "Amanda Lee");
    }

    #[test]
    fn department_filter_narrows_the_result() {
        let engineering = filter_directory("", Some("Engineering"));
        assert_eq!(engineering.len(), 2);
        assert!(filter_directory("sarah", Some("Finance")).is_empty());
    }

    #[test]
    fn departments_are_sorted_and_unique() {
        let departments = departments();
        assert_eq!(departments.len(), 7);
        let mut sorted = departments.clone();
        sorted.sort_unstable();
        assert_eq!(departments, sorted);
    }
}
