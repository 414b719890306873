// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Session-bus client for the Cloud Pinyin lexicon import service.
//
// Uses the zbus blocking API: the tool is strictly sequential and never
// needs more than one call in flight.

use std::path::Path;

use scel_import_core::config::ServiceConfig;
use scel_import_core::error::{ImportError, Result};
use tracing::{debug, info, warn};
use zbus::blocking::Connection;
use zbus::blocking::fdo::DBusProxy;
use zbus::names::{BusName, InterfaceName, WellKnownName};
use zbus::zvariant::ObjectPath;

use crate::traits::LexiconImporter;

/// Remote method that ingests one `.scel` file.
pub const IMPORT_METHOD: &str = "ImportScel";

/// Validated bus coordinates of the import service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceAddress {
    pub bus_name: WellKnownName<'static>,
    pub object_path: ObjectPath<'static>,
    pub interface: InterfaceName<'static>,
}

impl ServiceAddress {
    /// Check the configured names against the D-Bus naming rules.
    pub fn parse(config: &ServiceConfig) -> Result<Self> {
        let bus_name = WellKnownName::try_from(config.bus_name.clone()).map_err(|e| {
            ImportError::Config(format!("invalid bus name {:?}: {e}", config.bus_name))
        })?;
        let object_path = ObjectPath::try_from(config.object_path.clone()).map_err(|e| {
            ImportError::Config(format!("invalid object path {:?}: {e}", config.object_path))
        })?;
        let interface = InterfaceName::try_from(config.interface.clone()).map_err(|e| {
            ImportError::Config(format!("invalid interface {:?}: {e}", config.interface))
        })?;
        Ok(Self {
            bus_name,
            object_path,
            interface,
        })
    }
}

/// Handle to the remote import service on the session bus.
pub struct DbusImporter {
    conn: Connection,
    address: ServiceAddress,
}

impl DbusImporter {
    /// Connect to the session bus and make sure the service is there.
    ///
    /// If nobody owns the bus name and `autostart` is set, the bus daemon is
    /// asked to activate it. Any failure here is fatal to the caller: the
    /// dialog must not be shown without a service to send files to.
    pub fn connect(config: &ServiceConfig) -> Result<Self> {
        let address = ServiceAddress::parse(config)?;
        let conn = Connection::session().map_err(bus_err)?;
        debug!(unique_name = ?conn.unique_name(), "connected to session bus");

        ensure_service(&conn, &address.bus_name, config.autostart)?;

        info!(
            service = %address.bus_name,
            path = %address.object_path,
            "import service ready"
        );
        Ok(Self::from_parts(conn, address))
    }

    /// Wrap an already established connection without any name checks.
    fn from_parts(conn: Connection, address: ServiceAddress) -> Self {
        Self { conn, address }
    }
}

impl LexiconImporter for DbusImporter {
    fn service_name(&self) -> &str {
        self.address.bus_name.as_str()
    }

    fn import_scel(&self, path: &Path) -> Result<()> {
        let arg = bus_arg(path)?;

        self.conn
            .call_method(
                Some(self.address.bus_name.as_str()),
                self.address.object_path.as_str(),
                Some(self.address.interface.as_str()),
                IMPORT_METHOD,
                &(arg,),
            )
            .map_err(|e| ImportError::RemoteCall {
                path: path.to_path_buf(),
                detail: e.to_string(),
            })?;
        Ok(())
    }
}

/// The `ImportScel` argument for `path`. D-Bus strings are UTF-8 only.
pub fn bus_arg(path: &Path) -> Result<&str> {
    path.to_str()
        .ok_or_else(|| ImportError::NonUtf8Path(path.to_path_buf()))
}

/// Fail unless `name` has an owner, activating it first if allowed.
fn ensure_service(conn: &Connection, name: &WellKnownName<'_>, autostart: bool) -> Result<()> {
    let dbus = DBusProxy::new(conn).map_err(bus_err)?;

    let owned = dbus
        .name_has_owner(BusName::from(name.clone()))
        .map_err(|e| ImportError::Bus(e.to_string()))?;
    if owned {
        return Ok(());
    }

    if !autostart {
        return Err(ImportError::ServiceUnavailable {
            name: name.to_string(),
        });
    }

    debug!(service = %name, "name has no owner, requesting activation");
    match dbus.start_service_by_name(name.clone(), 0) {
        Ok(reply) => {
            debug!(service = %name, ?reply, "service activated");
            Ok(())
        }
        Err(e) => {
            warn!(service = %name, error = %e, "service activation failed");
            Err(ImportError::ServiceUnavailable {
                name: name.to_string(),
            })
        }
    }
}

fn bus_err(e: zbus::Error) -> ImportError {
    ImportError::Bus(e.to_string())
}
