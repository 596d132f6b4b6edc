//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use rolodex::domain::{Employment, ProfileId};
use rolodex::network::Network;
use std::path::Path;
use std::process::{Command, Output};

/// Ids of the reference network built by [`reference_network`].
pub struct People {
    pub sara: ProfileId,
    pub peter: ProfileId,
    pub milan: ProfileId,
    pub masum: ProfileId,
    pub kris: ProfileId,
    pub bob: ProfileId,
}

/// Sara - Peter - Milan - {Masum, Kris}, Masum - Kris, and Bob on his own.
pub fn reference_network() -> (Network, People) {
    let mut network = Network::new();

    let sara = network.create_profile("Sara Sood", "Professor of Computer Science", "Northwestern").unwrap();
    let peter = network.create_profile("Peter Zhong", "Software Engineer Intern", "Teladoc Health").unwrap();
    let milan = network.create_profile("Milan McGraw", "Consultant", "FEV Consulting").unwrap();
    let masum = network.create_profile("Masum Patel", "Consultant", "Deloitte").unwrap();
    let kris = network.create_profile("Kris Hammond", "Professor of Computer Science", "Northwestern").unwrap();
    let bob = network.create_profile("Bob", "Northwestern", "").unwrap();

    for job in [
        Employment::new("some role", "some company", 1995, 2001),
        Employment::new("another role", "another company", 2001, 2009),
        Employment::new("yet another role", "yet another company", 2009, 2018),
    ] {
        network.add_employment(milan, job).unwrap();
    }
    for job in [
        Employment::new("another role", "another company", 1995, 1996),
        Employment::new("yet another role", "yet another company", 1996, 2010),
    ] {
        network.add_employment(masum, job).unwrap();
    }

    network.connect(sara, peter).unwrap();
    network.connect(sara, peter).unwrap();
    network.connect(peter, milan).unwrap();
    network.connect(masum, milan).unwrap();
    network.connect(masum, kris).unwrap();
    network.connect(milan, kris).unwrap();

    let people = People {
        sara,
        peter,
        milan,
        masum,
        kris,
        bob,
    };
    (network, people)
}

/// Run the rolodex binary in the specified directory
pub fn run_rolodex_in_dir(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rolodex"))
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute rolodex binary")
}

/// Run the binary and assert that it succeeded, returning stdout
pub fn run_ok(dir: &Path, args: &[&str]) -> String {
    let output = run_rolodex_in_dir(dir, args);
    assert!(
        output.status.success(),
        "rolodex {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}
